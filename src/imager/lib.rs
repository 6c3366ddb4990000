//! Load a raster image from a file or a byte buffer, resize, crop or rotate it,
//! then encode it back to JPEG, PNG or GIF bytes or save it to disk.
//!
//! Decoding, resampling and encoding are delegated to the `image` and
//! `imageproc` crates; [`Imager`] only routes calls and keeps the format tag.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::error::ApplicationError;
pub use application::imager::{Imager, TRANSPARENT};
pub use domain::error::DomainError;
pub use domain::format_tag::FormatTag;
pub use domain::image_processor_trait::ImageProcessor;
pub use domain::resize_mode::ResizeMode;
pub use infrastructure::error::InfrastructureError;
pub use infrastructure::image_processor::DefaultImageProcessor;

pub use image;
