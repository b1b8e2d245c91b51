//! Sync Engine Port
//!
//! The contract with the external content-sync collaborator: open a scoped
//! source session, inspect and override its declared parameters, then drive
//! a single source-to-destination synchronization.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::entities::ChangeSummary;

/// Error from the sync collaborator
#[derive(Error, Debug)]
pub enum SyncError {
    /// The engine is not installed or cannot be invoked
    #[error("sync engine not available: {0}")]
    NotAvailable(String),
    /// The source session could not be opened
    #[error("failed to open source session: {0}")]
    SessionFailed(String),
    /// The synchronization itself failed
    #[error("{0}")]
    SyncFailed(String),
}

/// Transport/representation tag for one side of a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// A package archive
    Package,
    /// A content path (file or directory tree)
    ContentPath,
    /// Let the engine pick based on the source
    Auto,
}

impl ProviderKind {
    /// Wire name of the provider, as the sync service spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::ContentPath => "contentPath",
            Self::Auto => "auto",
        }
    }
}

/// Trace verbosity requested from the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraceLevel {
    Off,
    #[default]
    Info,
    Verbose,
}

/// Callback invoked for every trace message the engine emits
///
/// May be called from whatever thread the engine uses; implementations must
/// be side-effect-only and must not mutate orchestrator state.
pub type TraceCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Options for the source side of a session
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    pub trace_level: TraceLevel,
}

/// Options for the destination side of a synchronization
#[derive(Clone, Default)]
pub struct DestinationOptions {
    /// Sync-service endpoint address
    pub computer_name: String,
    /// Username for authentication
    pub user_name: String,
    /// Password for authentication
    pub password: String,
    /// Preserve ACLs at the destination
    pub include_acls: bool,
    /// Trace verbosity
    pub trace_level: TraceLevel,
    /// Registered progress-trace callback
    pub trace: Option<TraceCallback>,
}

impl std::fmt::Debug for DestinationOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Credentials are never logged
        f.debug_struct("DestinationOptions")
            .field("computer_name", &self.computer_name)
            .field("user_name", &self.user_name)
            .field("include_acls", &self.include_acls)
            .field("trace_level", &self.trace_level)
            .field("trace", &self.trace.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

/// Options governing the synchronization itself
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Leave destination items alone when they are absent at the source
    ///
    /// Conservative default; overridable from the CLI.
    pub do_not_delete: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            do_not_delete: true,
        }
    }
}

/// A parameter the source artifact declares in its own manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncParameter {
    pub name: String,
    /// Provider-assigned default, kept when no override matches
    pub default_value: Option<String>,
}

impl SyncParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: None,
        }
    }
}

/// A scoped source session
///
/// Holds whatever resources the engine needs for the source side. The
/// session is released on drop, on every exit path.
pub trait SourceSession {
    /// The parameters the artifact declares, in manifest order
    fn parameters(&self) -> &[SyncParameter];

    /// Override a declared parameter by exact name
    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), SyncError>;

    /// Synchronize source to destination
    ///
    /// The one blocking, potentially long-running operation. Trace messages
    /// are delivered through the destination options' callback as they
    /// arrive.
    fn sync_to(
        &mut self,
        destination_provider: ProviderKind,
        destination_path: &str,
        destination: &DestinationOptions,
        options: &SyncOptions,
    ) -> Result<ChangeSummary, SyncError>;
}

/// Trait for sync engines
pub trait SyncEngine {
    /// Open a scoped source session
    fn open_session(
        &self,
        provider: ProviderKind,
        source_path: &Path,
        options: &SourceOptions,
    ) -> Result<Box<dyn SourceSession>, SyncError>;
}
