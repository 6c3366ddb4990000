use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Policy used by `Imager::resize_with` to map an image onto a target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Largest size inside the box that keeps the aspect ratio (Lanczos3).
    #[default]
    Fit,
    /// Cover the box keeping the aspect ratio, then crop the overflow around the centre.
    Crop,
    /// Exactly the box size, aspect ratio ignored (Lanczos3).
    Scale,
    /// Exactly the box size, aspect ratio ignored (nearest neighbour).
    Stretch,
}

impl FromStr for ResizeMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fit" => Ok(ResizeMode::Fit),
            "crop" => Ok(ResizeMode::Crop),
            "scale" => Ok(ResizeMode::Scale),
            "stretch" => Ok(ResizeMode::Stretch),
            other => Err(DomainError::UnknownResizeMode(other.to_string())),
        }
    }
}
