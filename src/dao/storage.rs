use std::{io, path::PathBuf};

use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends while reading or writing the game collection.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing document could not be read or written.
    #[error("failed to access game data file `{}`", path.display())]
    Io {
        /// Path of the document or staging file being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The backing document exists but does not hold a valid game collection.
    #[error("game data file `{}` is malformed", path.display())]
    Format {
        /// Path of the offending document.
        path: PathBuf,
        /// Underlying (de)serialization failure.
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Construct an I/O error for the document at `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }

    /// Construct a format error for the document at `path`.
    pub fn format(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StorageError::Format {
            path: path.into(),
            source,
        }
    }
}
