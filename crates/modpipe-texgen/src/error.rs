//! Error types for texture compositing

use std::path::PathBuf;
use thiserror::Error;

/// Result type for compositing operations.
pub type TexGenResult<T> = Result<T, TexGenError>;

/// Errors that can occur during texture compositing.
#[derive(Debug, Error)]
pub enum TexGenError {
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV decode error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Image decode or encode error
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    /// The color table header lacks a required column
    #[error("Color table is missing column {0:?}")]
    MissingColumn(String),

    /// An ore color is not a six-digit hex string
    #[error("Invalid hex color {0:?}")]
    InvalidHexColor(String),

    /// A template mask and stone texture differ in size
    #[error("Size mismatch: template {template} does not match stone {stone}")]
    SizeMismatch {
        /// Template image path
        template: PathBuf,
        /// Stone image path
        stone: PathBuf,
    },
}
