//! Error types for sqlsnake.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for sqlsnake operations.
#[derive(Debug, Error)]
pub enum SqlSnakeError {
    /// The input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SqlSnakeError {
    /// Create a read error for the given path.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for the given path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for sqlsnake operations.
pub type SqlSnakeResult<T> = Result<T, SqlSnakeError>;
