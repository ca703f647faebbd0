//! Error types for scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffolding operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors that can occur while generating scaffold artifacts.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Creating the target directory tree failed
    #[error("Failed to create directory {path}: {source}")]
    CreateDirFailed {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing a rendered artifact failed
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        /// Artifact path that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
