//! Store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when using the store.
#[derive(Error, Debug)]
pub enum DbError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be parsed or encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A write was rejected before touching storage.
    #[error("{0}")]
    Validation(String),

    /// No product with the requested id.
    #[error("Product not found")]
    NotFound(i64),
}

impl From<serde_json::Error> for DbError {
    fn from(e: serde_json::Error) -> Self {
        DbError::Serialization(e.to_string())
    }
}

impl DbError {
    /// The backing file does not exist yet.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, DbError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DbError::Io {
            path: path.into(),
            source,
        }
    }
}
