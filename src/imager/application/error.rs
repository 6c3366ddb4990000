use thiserror::Error;

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error occurred: {0}")]
    DomainError(#[from] DomainError),

    #[error("Infrastructure error occurred: {0}")]
    InfrastructureError(#[from] InfrastructureError),
}

impl ApplicationError {
    /// The path could not be opened, created or written.
    pub fn is_file_access(&self) -> bool {
        matches!(self, ApplicationError::InfrastructureError(InfrastructureError::FileAccess { .. }))
    }

    /// The bytes were not a recognised or intact image.
    pub fn is_decode(&self) -> bool {
        matches!(self, ApplicationError::InfrastructureError(InfrastructureError::Decode(_)))
    }

    /// The encoder rejected the image or the requested output format.
    pub fn is_encode(&self) -> bool {
        matches!(self, ApplicationError::InfrastructureError(InfrastructureError::Encode(_)))
    }
}
