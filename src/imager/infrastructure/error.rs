use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Failed to access file '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image decoding failed: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Image encoding failed: {0}")]
    Encode(#[source] image::ImageError),
}

impl InfrastructureError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InfrastructureError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
