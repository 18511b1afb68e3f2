//! Unified error types for InfoTools.
//!
//! Display strings are short status messages suitable for direct display on a
//! page. Service-level failures degrade the feature, never the process.

use std::path::PathBuf;

/// Unified error type for service-level operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed (non-2xx status, DNS failure, connection error).
    #[error("HTTP error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The favicon hash database file is absent.
    #[error("favicon database not found: {}", .0.display())]
    DatabaseMissing(PathBuf),

    /// File I/O failed (digest computation, database read, settings write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization failed.
    #[error("settings serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
