//! Error types for sitepush
//!
//! Uses `thiserror` for library errors; the binary boundary wraps them in
//! `anyhow` and maps every failure to exit code 1.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sitepush operations
pub type SitepushResult<T> = Result<T, SitepushError>;

/// Main error type for sitepush operations
///
/// Every variant is fatal to the run: nothing is retried or recovered
/// locally. Partial item failures reported inside a returned change summary
/// are not errors at this level.
#[derive(Error, Debug)]
pub enum SitepushError {
    /// A required path (publish settings or source) does not exist
    #[error("{}: not found", .path.display())]
    NotFound { path: PathBuf },

    /// The profile document has no entry with the supported publish method
    #[error("{}: not a valid publishing profile", .path.display())]
    InvalidProfile { path: PathBuf },

    /// The profile document could not be read or parsed as XML
    #[error("{}: unreadable publishing profile: {message}", .path.display())]
    UnreadableProfile { path: PathBuf, message: String },

    /// The external sync collaborator reported an error
    #[error("synchronization failed: {message}")]
    SyncFailed { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
