//! Error types for the subtitle matcher.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the subtitle matcher.
#[derive(Error, Debug)]
pub enum Error {
    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("File already exists: {0}")]
    FileAlreadyExists(String),

    // Scan errors
    #[error("Failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    // Report/config errors
    #[error("Invalid report file: {0}")]
    InvalidReport(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // TOML errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error came from walking the directory tree.
    pub fn is_scan_failure(&self) -> bool {
        matches!(
            self,
            Error::Scan { .. } | Error::PathNotFound(_) | Error::NotADirectory(_)
        )
    }
}
