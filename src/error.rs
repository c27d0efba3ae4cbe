//! Error types for engine operations
//!
//! Provides unified error handling for scene mutations, outpaint commits,
//! and snapshot persistence.

use thiserror::Error;

/// Errors that can occur during engine operations
#[derive(Error, Debug)]
pub enum CanvasError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An operation referenced an object id the scene does not hold
    #[error("No object with id {0}")]
    MissingObject(u64),

    /// Image generation collaborator failed
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Outpaint compositing collaborator failed
    #[error("Compositing failed: {0}")]
    Compositing(String),

    /// An outpaint operation was requested without an active session
    #[error("No active outpaint session")]
    NoOutpaintSession,

    /// No writable location for scene snapshots could be determined
    #[error("No snapshot directory available")]
    NoSnapshotDir,

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for engine operations
pub type CanvasResult<T> = Result<T, CanvasError>;

impl From<String> for CanvasError {
    fn from(s: String) -> Self {
        CanvasError::Other(s)
    }
}

impl From<&str> for CanvasError {
    fn from(s: &str) -> Self {
        CanvasError::Other(s.to_string())
    }
}

impl From<anyhow::Error> for CanvasError {
    fn from(e: anyhow::Error) -> Self {
        CanvasError::Other(format!("{e:#}"))
    }
}
