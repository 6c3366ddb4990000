use std::fmt;
use std::path::Path;

use image::{DynamicImage, GenericImageView, Rgba};
use tracing::{debug, info, instrument};

use super::error::ApplicationError;
use crate::domain::format_tag::FormatTag;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::resize_mode::ResizeMode;
use crate::infrastructure::codec::{self, DecodedImage};
use crate::infrastructure::file_storage::LocalFileStorage;
use crate::infrastructure::image_processor::DefaultImageProcessor;

/// Fill for canvas regions exposed by `Imager::rotate`.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A decoded image plus the format tag that `to_bytes` encodes with.
///
/// Transform methods replace the held image and return `&mut Self`, so calls chain:
///
/// ```no_run
/// use imager::{FormatTag, Imager, ResizeMode};
///
/// let bytes = Imager::from_file("photo.jpg")?
///     .resize_with(800, 600, ResizeMode::Crop)
///     .rotate(90.0)
///     .set_format(Some(FormatTag::Png))
///     .to_bytes()?;
/// # Ok::<(), imager::ApplicationError>(())
/// ```
///
/// `to_bytes` picks its encoder from the stored tag while `save` picks it from the
/// path extension; the two are independent.
#[derive(Clone)]
pub struct Imager<P: ImageProcessor = DefaultImageProcessor> {
    image: DynamicImage,
    format: Option<FormatTag>,
    processor: P,
}

impl Imager {
    /// Wraps an already-decoded image. No format tag is set.
    pub fn new(image: DynamicImage) -> Self {
        Self::with_processor(image, DefaultImageProcessor::new())
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ApplicationError> {
        let decoded = LocalFileStorage::new().read_image(path.as_ref())?;
        Ok(Self::from_decoded(decoded))
    }

    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, ApplicationError> {
        let decoded = codec::decode_bytes(data)?;
        Ok(Self::from_decoded(decoded))
    }

    fn from_decoded(decoded: DecodedImage) -> Self {
        let mut imager = Self::new(decoded.image);
        imager.format = decoded.format;
        info!(
            width = imager.width(),
            height = imager.height(),
            format = ?imager.format,
            "Image decoded"
        );
        imager
    }
}

impl<P: ImageProcessor> Imager<P> {
    pub fn with_processor(image: DynamicImage, processor: P) -> Self {
        Self {
            image,
            format: None,
            processor,
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn format(&self) -> Option<FormatTag> {
        self.format
    }

    pub fn set_format(&mut self, format: Option<FormatTag>) -> &mut Self {
        self.format = format;
        self
    }

    /// Sets the tag from one of `jpeg`, `jpg`, `gif`, `png` or `webp`.
    pub fn set_format_name(&mut self, name: &str) -> Result<&mut Self, ApplicationError> {
        let tag = name.parse::<FormatTag>()?;
        Ok(self.set_format(Some(tag)))
    }

    // -- Reloading ------------------------------------------------------------

    /// Replaces image and tag with the decoded `data`. On error the handle is left untouched.
    #[instrument(skip(self, data), fields(data_len = data.len()))]
    pub fn load_bytes(&mut self, data: &[u8]) -> Result<(), ApplicationError> {
        let decoded = codec::decode_bytes(data)?;
        self.replace(decoded);
        Ok(())
    }

    /// Same as `load_bytes`, reading from `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), ApplicationError> {
        let decoded = LocalFileStorage::new().read_image(path.as_ref())?;
        self.replace(decoded);
        Ok(())
    }

    fn replace(&mut self, decoded: DecodedImage) {
        self.image = decoded.image;
        self.format = decoded.format;
        debug!(width = self.width(), height = self.height(), format = ?self.format, "Image reloaded");
    }

    // -- Transformations ------------------------------------------------------

    /// Resizes with `ResizeMode::Fit`.
    pub fn resize(&mut self, width: u32, height: u32) -> &mut Self {
        self.resize_with(width, height, ResizeMode::default())
    }

    /// Zero target dimensions are a caller error; the outcome is whatever the resampler yields.
    #[instrument(skip(self))]
    pub fn resize_with(&mut self, width: u32, height: u32, mode: ResizeMode) -> &mut Self {
        info!(from_w = self.width(), from_h = self.height(), "Resizing image");
        self.image = self.processor.resize(&self.image, width, height, mode);
        debug!(new_w = self.width(), new_h = self.height(), "Resize complete");
        self
    }

    #[instrument(skip(self))]
    pub fn crop(&mut self, width: u32, height: u32, x: i32, y: i32) -> &mut Self {
        self.image = self.processor.crop(&self.image, width, height, x, y);
        debug!(new_w = self.width(), new_h = self.height(), "Crop complete");
        self
    }

    /// Rotates counter-clockwise by `degrees`, leaving exposed corners transparent.
    pub fn rotate(&mut self, degrees: f32) -> &mut Self {
        self.rotate_with_background(degrees, TRANSPARENT)
    }

    #[instrument(skip(self))]
    pub fn rotate_with_background(&mut self, degrees: f32, background: Rgba<u8>) -> &mut Self {
        self.image = self.processor.rotate(&self.image, degrees, background);
        debug!(new_w = self.width(), new_h = self.height(), "Rotation complete");
        self
    }

    // -- Output ---------------------------------------------------------------

    /// Encodes with the codec named by the format tag.
    ///
    /// A `webp` tag or no tag at all yields an empty buffer and no error.
    #[instrument(skip(self), fields(format = ?self.format))]
    pub fn to_bytes(&self) -> Result<Vec<u8>, ApplicationError> {
        let bytes = codec::encode(&self.image, self.format)?;
        debug!(len = bytes.len(), "Image encoded");
        Ok(bytes)
    }

    /// Writes the image to `path` using the codec implied by its extension.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ApplicationError> {
        LocalFileStorage::new().save_image(&self.image, path.as_ref())?;
        info!("Image saved");
        Ok(())
    }
}

impl<P: ImageProcessor> fmt::Debug for Imager<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Imager")
            .field("dimensions", &self.dimensions())
            .field("color", &self.image.color())
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
