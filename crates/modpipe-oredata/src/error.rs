//! Error types for the ore/rock cross-referencer

use std::path::PathBuf;
use thiserror::Error;

/// Result type for cross-referencer operations.
pub type OreDataResult<T> = Result<T, OreDataError>;

/// Errors that can occur while cross-referencing game data.
#[derive(Debug, Error)]
pub enum OreDataError {
    /// Reading an input document failed
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        /// Document path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Decoding an input document failed
    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        /// Document path
        path: PathBuf,
        /// Underlying decode error
        source: serde_json::Error,
    },

    /// An expected top-level collection is missing or has the wrong shape
    #[error("Missing or invalid collection '{0}' in input document")]
    MissingCollection(String),

    /// A collection entry is not a string
    #[error("Non-string entry in collection '{0}'")]
    NonStringEntry(String),

    /// A variant key does not split into the expected components
    #[error("Malformed variant key: {0:?}")]
    MalformedVariant(String),
}
