//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Distinguishes decode, resize, model-invocation, and encode failures so callers
//! can react to each class instead of a single collapsed message.
use thiserror::Error;

use crate::types::ImageRole;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Model error: {0}")]
    Model(#[from] crate::model::ModelError),

    #[error("Image encode error: {0}")]
    Encode(String),

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: usize },

    #[error("Unknown {role} sample: {name}")]
    UnknownSample { role: ImageRole, name: String },

    #[error("External error: {0}")]
    External(String),
}
