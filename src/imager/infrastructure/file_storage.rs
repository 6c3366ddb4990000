use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use image::error::{ImageFormatHint, UnsupportedError};
use image::{DynamicImage, ImageError, ImageFormat, ImageOutputFormat};

use super::codec::{self, DecodedImage};
use super::error::InfrastructureError;

/// JPEG quality used when the file extension picks JPEG.
pub const SAVE_JPEG_QUALITY: u8 = 95;

/// Reads and writes images on the local filesystem. File handles never outlive a call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }

    /// Opens `path` and decodes it; the codec comes from the file header, not the extension.
    pub fn read_image(&self, path: &Path) -> Result<DecodedImage, InfrastructureError> {
        let file = File::open(path).map_err(|e| InfrastructureError::file_access(path, e))?;
        // Opening can succeed where reading fails (a directory on Unix).
        codec::decode(BufReader::new(file)).map_err(|e| match e {
            InfrastructureError::Decode(ImageError::IoError(io)) => InfrastructureError::file_access(path, io),
            other => other,
        })
    }

    /// Writes `image` to `path`, choosing the codec from the file extension.
    pub fn save_image(&self, image: &DynamicImage, path: &Path) -> Result<(), InfrastructureError> {
        // Resolve the encoder before creating the file so an unsupported extension leaves nothing behind.
        let format = ImageFormat::from_path(path).map_err(InfrastructureError::Encode)?;
        let output = ImageOutputFormat::from(format);
        if let ImageOutputFormat::Unsupported(_) = output {
            return Err(InfrastructureError::Encode(ImageError::Unsupported(
                UnsupportedError::from(ImageFormatHint::Exact(format)),
            )));
        }

        codec::ensure_not_empty(image)?;

        let file = File::create(path).map_err(|e| InfrastructureError::file_access(path, e))?;
        let mut writer = BufWriter::new(file);
        let written = match output {
            ImageOutputFormat::Jpeg(_) => codec::write_jpeg(image, &mut writer, SAVE_JPEG_QUALITY),
            other => image
                .write_to(&mut writer, other)
                .map_err(InfrastructureError::Encode),
        };
        written.map_err(|e| match e {
            InfrastructureError::Encode(ImageError::IoError(io)) => InfrastructureError::file_access(path, io),
            other => other,
        })?;
        writer.flush().map_err(|e| InfrastructureError::file_access(path, e))
    }
}
