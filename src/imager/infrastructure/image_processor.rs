use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};
use tracing::debug;

use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::resize_mode::ResizeMode;

/// `ImageProcessor` backed by the `image` resamplers and `imageproc` warps.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultImageProcessor;

impl DefaultImageProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl ImageProcessor for DefaultImageProcessor {
    fn resize(&self, image: &DynamicImage, width: u32, height: u32, mode: ResizeMode) -> DynamicImage {
        // An empty source stays empty; the resamplers would invent pixels or never return.
        if image.width() == 0 || image.height() == 0 {
            return image.clone();
        }
        match mode {
            ResizeMode::Fit => image.resize(width, height, FilterType::Lanczos3),
            ResizeMode::Crop => image.resize_to_fill(width, height, FilterType::Lanczos3),
            ResizeMode::Scale => image.resize_exact(width, height, FilterType::Lanczos3),
            ResizeMode::Stretch => image.resize_exact(width, height, FilterType::Nearest),
        }
    }

    fn crop(&self, image: &DynamicImage, width: u32, height: u32, x: i32, y: i32) -> DynamicImage {
        let (img_w, img_h) = image.dimensions();
        let clip = |origin: i32, len: u32, bound: u32| {
            let start = i64::from(origin).clamp(0, i64::from(bound));
            let end = (i64::from(origin) + i64::from(len)).clamp(0, i64::from(bound));
            // Both ends lie in [0, bound], so the casts are lossless.
            (start as u32, (end - start).max(0) as u32)
        };
        let (left, w) = clip(x, width, img_w);
        let (top, h) = clip(y, height, img_h);
        if w == 0 || h == 0 {
            // No overlap on either axis is an empty image, not a zero-width strip.
            return image.crop_imm(0, 0, 0, 0);
        }
        debug!(left, top, w, h, "Clipped crop rectangle");
        image.crop_imm(left, top, w, h)
    }

    fn rotate(&self, image: &DynamicImage, degrees: f32, background: Rgba<u8>) -> DynamicImage {
        let normalized = degrees.rem_euclid(360.0);

        // Quarter turns are lossless. The image crate turns clockwise.
        if normalized == 0.0 {
            return image.clone();
        }
        if normalized == 90.0 {
            return image.rotate270();
        }
        if normalized == 180.0 {
            return image.rotate180();
        }
        if normalized == 270.0 {
            return image.rotate90();
        }

        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return image.clone();
        }
        let (new_w, new_h) = rotated_dimensions(width, height, normalized);

        // Image space has y pointing down, so a positive Projection angle turns clockwise.
        let projection = Projection::translate(new_w as f32 / 2.0, new_h as f32 / 2.0)
            * Projection::rotate(-normalized.to_radians())
            * Projection::translate(-(width as f32) / 2.0, -(height as f32) / 2.0);

        let source = image.to_rgba8();
        let mut canvas = RgbaImage::from_pixel(new_w, new_h, background);
        warp_into(&source, &projection, Interpolation::Bilinear, background, &mut canvas);
        debug!(new_w, new_h, "Rotated onto expanded canvas");
        DynamicImage::ImageRgba8(canvas)
    }
}

/// Bounding box of a `width` x `height` rectangle turned by `degrees`.
fn rotated_dimensions(width: u32, height: u32, degrees: f32) -> (u32, u32) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let (w, h) = (width as f32, height as f32);

    // Drop float noise below a tenth of a pixel instead of growing the canvas by one.
    let span = |extent: f32| {
        let whole = extent.floor();
        let pixels = if extent - whole > 0.1 { whole + 1.0 } else { whole };
        (pixels as u32).max(1)
    };

    (span(w * cos + h * sin), span(w * sin + h * cos))
}
