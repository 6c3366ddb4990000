use std::fmt;
use std::str::FromStr;

use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Short name of the codec an `Imager` encodes to.
///
/// `Jpeg` and `Jpg` are distinct tags that select the same encoder. `Webp` is
/// accepted as a tag but has no encoder behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    Jpeg,
    Jpg,
    Gif,
    Png,
    Webp,
}

impl FormatTag {
    pub const ALL: [FormatTag; 5] = [
        FormatTag::Jpeg,
        FormatTag::Jpg,
        FormatTag::Gif,
        FormatTag::Png,
        FormatTag::Webp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormatTag::Jpeg => "jpeg",
            FormatTag::Jpg => "jpg",
            FormatTag::Gif => "gif",
            FormatTag::Png => "png",
            FormatTag::Webp => "webp",
        }
    }

    /// Tag recorded for a format sniffed from an image header.
    pub fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(FormatTag::Jpeg),
            ImageFormat::Png => Some(FormatTag::Png),
            ImageFormat::Gif => Some(FormatTag::Gif),
            ImageFormat::WebP => Some(FormatTag::Webp),
            _ => None,
        }
    }
}

impl FromStr for FormatTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| DomainError::UnknownFormatTag(s.to_string()))
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_exact_vocabulary() {
        for tag in FormatTag::ALL {
            assert_eq!(tag.as_str().parse::<FormatTag>(), Ok(tag));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_mixed_case() {
        assert_eq!(
            "bmp".parse::<FormatTag>(),
            Err(DomainError::UnknownFormatTag("bmp".to_string()))
        );
        assert!("JPEG".parse::<FormatTag>().is_err());
        assert!("".parse::<FormatTag>().is_err());
    }

    #[test]
    fn test_from_image_format() {
        assert_eq!(FormatTag::from_image_format(ImageFormat::Jpeg), Some(FormatTag::Jpeg));
        assert_eq!(FormatTag::from_image_format(ImageFormat::Png), Some(FormatTag::Png));
        assert_eq!(FormatTag::from_image_format(ImageFormat::Gif), Some(FormatTag::Gif));
        assert_eq!(FormatTag::from_image_format(ImageFormat::WebP), Some(FormatTag::Webp));
        assert_eq!(FormatTag::from_image_format(ImageFormat::Bmp), None);
    }

    #[test]
    fn test_serde_uses_tag_strings() {
        assert_eq!(serde_json::to_string(&FormatTag::Jpg).unwrap(), "\"jpg\"");
        let tag: FormatTag = serde_json::from_str("\"webp\"").unwrap();
        assert_eq!(tag, FormatTag::Webp);
    }
}
