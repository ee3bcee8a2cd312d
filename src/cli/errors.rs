use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid size parameter: {size}. Must be a positive integer or 'original'")]
    InvalidSize { size: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: usize },

    #[error("Invalid quality: {quality}. Must be between 1 and 100")]
    InvalidQuality { quality: u8 },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Stylization error: {0}")]
    Stylize(#[from] stylize::Error),
}
