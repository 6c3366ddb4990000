use image::{DynamicImage, Rgba};

use crate::domain::resize_mode::ResizeMode;

/// Geometric transforms applied by an `Imager`.
///
/// Every method takes the current image and returns its replacement; the
/// handle swaps it in wholesale.
#[cfg_attr(test, mockall::automock)]
pub trait ImageProcessor {
    fn resize(&self, image: &DynamicImage, width: u32, height: u32, mode: ResizeMode) -> DynamicImage;

    /// Sub-rectangle `[x, x + width) x [y, y + height)`, clipped to the image bounds.
    fn crop(&self, image: &DynamicImage, width: u32, height: u32, x: i32, y: i32) -> DynamicImage;

    /// Counter-clockwise rotation; the canvas grows to hold the result.
    fn rotate(&self, image: &DynamicImage, degrees: f32, background: Rgba<u8>) -> DynamicImage;
}
