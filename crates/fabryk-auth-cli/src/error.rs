//! Error types for fabryk-auth-cli

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for fabryk-auth-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fabryk-auth-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Reading a file failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be located or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// A JSON argument was malformed
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Wrap an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
