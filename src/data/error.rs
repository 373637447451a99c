//! Error types for the extraction pipeline
//!
//! Structural failures are fatal and abort widget construction before any
//! host mutation. Value-level anomalies (non-numeric cells, placeholder
//! markers) are never errors; they are absorbed as missing readings.

use thiserror::Error;

/// Errors that can occur while building a tracker widget
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The host marker element or a required table was not located
    #[error("source table not found")]
    SourceNotFound,

    /// The located table violates the expected shape
    #[error("malformed table: {0}")]
    MalformedTable(String),

    /// A required injected capability was not supplied
    #[error("dependency unavailable: {0}")]
    DependencyUnavailable(&'static str),

    /// Failure reported by the external charting collaborator
    #[error("renderer error: {0}")]
    Renderer(String),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

impl From<String> for TrackerError {
    fn from(s: String) -> Self {
        TrackerError::Other(s)
    }
}

impl From<&str> for TrackerError {
    fn from(s: &str) -> Self {
        TrackerError::Other(s.to_string())
    }
}
