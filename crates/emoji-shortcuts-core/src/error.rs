//! Error types for building and exporting emoji mappings.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or exporting a mapping.
///
/// Malformed individual entries are never errors; they are skipped
/// while building.
#[derive(Error, Debug)]
pub enum Error {
    /// The metadata document is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Property list encoding error.
    #[error("plist error: {0}")]
    Plist(#[from] plist::Error),

    /// CSV encoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
