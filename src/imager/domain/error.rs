use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown format tag: '{0}' (expected jpeg, jpg, gif, png or webp)")]
    UnknownFormatTag(String),

    #[error("Unknown resize mode: '{0}' (expected fit, crop, scale or stretch)")]
    UnknownResizeMode(String),
}
