//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog, cart and search operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Unknown sort mode.
    #[error("Unknown sort mode: {0}")]
    InvalidSort(String),

    /// Unknown locale tag.
    #[error("Unknown locale: {0}")]
    InvalidLocale(String),

    /// Failed to list an asset directory.
    #[error("Asset listing failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
