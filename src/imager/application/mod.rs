pub mod error;
pub mod imager;
