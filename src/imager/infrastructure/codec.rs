use std::io::{BufRead, Cursor, Seek, Write};

use image::error::{ParameterError, ParameterErrorKind};
use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageError, ImageOutputFormat};
use tracing::debug;

use super::error::InfrastructureError;
use crate::domain::format_tag::FormatTag;

/// JPEG quality used by `encode`.
pub const JPEG_QUALITY: u8 = 100;

/// An image fresh off the decoder plus the tag of the format it was sniffed as.
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: Option<FormatTag>,
}

/// Decodes `reader`, picking the codec from the header bytes.
pub fn decode<R: BufRead + Seek>(reader: R) -> Result<DecodedImage, InfrastructureError> {
    let reader = ImageReader::new(reader)
        .with_guessed_format()
        .map_err(|e| InfrastructureError::Decode(ImageError::IoError(e)))?;
    let sniffed = reader.format();
    debug!(?sniffed, "Guessed image format");

    // With no recognised header the reader reports an unsupported format.
    let image = reader.decode().map_err(InfrastructureError::Decode)?;
    Ok(DecodedImage {
        image,
        format: sniffed.and_then(FormatTag::from_image_format),
    })
}

pub fn decode_bytes(data: &[u8]) -> Result<DecodedImage, InfrastructureError> {
    decode(Cursor::new(data))
}

/// Encodes `image` with the codec selected by `format`.
///
/// `Webp` and `None` have no encoder here and produce an empty buffer without error.
pub fn encode(image: &DynamicImage, format: Option<FormatTag>) -> Result<Vec<u8>, InfrastructureError> {
    let mut buffer = Cursor::new(Vec::new());
    if matches!(format, Some(FormatTag::Jpeg | FormatTag::Jpg | FormatTag::Png | FormatTag::Gif)) {
        ensure_not_empty(image)?;
    }
    match format {
        Some(FormatTag::Jpeg | FormatTag::Jpg) => {
            write_jpeg(image, &mut buffer, JPEG_QUALITY)?;
        }
        Some(FormatTag::Png) => {
            image
                .write_to(&mut buffer, ImageOutputFormat::Png)
                .map_err(InfrastructureError::Encode)?;
        }
        Some(FormatTag::Gif) => {
            image
                .write_to(&mut buffer, ImageOutputFormat::Gif)
                .map_err(InfrastructureError::Encode)?;
        }
        Some(FormatTag::Webp) | None => {
            debug!(?format, "No encoder for format tag, returning empty buffer");
        }
    }
    Ok(buffer.into_inner())
}

/// Rejects 0-pixel images up front; not every encoder does, and some emit undecodable output.
pub(crate) fn ensure_not_empty(image: &DynamicImage) -> Result<(), InfrastructureError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(InfrastructureError::Encode(ImageError::Parameter(
            ParameterError::from_kind(ParameterErrorKind::DimensionMismatch),
        )));
    }
    Ok(())
}

/// JPEG has no alpha channel and only 8-bit samples, so anything else is flattened to RGB8 first.
pub(crate) fn write_jpeg<W: Write + Seek>(
    image: &DynamicImage,
    writer: &mut W,
    quality: u8,
) -> Result<(), InfrastructureError> {
    let result = match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => {
            image.write_to(writer, ImageOutputFormat::Jpeg(quality))
        }
        other => DynamicImage::ImageRgb8(other.to_rgb8()).write_to(writer, ImageOutputFormat::Jpeg(quality)),
    };
    result.map_err(InfrastructureError::Encode)
}
