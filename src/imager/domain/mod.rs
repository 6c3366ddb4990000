pub mod error;
pub mod format_tag;
pub mod image_processor_trait;
pub mod resize_mode;
