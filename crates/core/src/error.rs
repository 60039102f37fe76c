//! Error types for the findex engine
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. None of these variants cross the query-time public
//! surface: short queries and not-yet-ready indexes are defined no-ops, and
//! the catalog loader swallows its errors into fallback. Errors exist at the
//! catalog boundary and the persistence hand-off only.

use std::io;
use thiserror::Error;

/// Result type alias for findex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the findex engine
#[derive(Debug, Error)]
pub enum Error {
    /// A catalog source could not produce a snapshot
    #[error("catalog source '{source_name}' unavailable: {reason}")]
    CatalogUnavailable {
        /// Which source failed (e.g. "http", "file-cache")
        source_name: String,
        /// Human-readable failure reason
        reason: String,
    },

    /// The catalog payload could not be interpreted as product records
    #[error("malformed catalog payload: {0}")]
    MalformedPayload(String),

    /// I/O error (cache files, persistence targets)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Best-effort persistence hand-off failed
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl Error {
    /// Shorthand for a catalog failure
    pub fn catalog(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::CatalogUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
