//! Change Summary
//!
//! The post-synchronization report returned by the sync collaborator.
//! The orchestrator only reads and reports it.

use serde::Serialize;

/// Counts of what a synchronization changed at the destination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    /// Objects added at the destination
    pub added: u64,
    /// Objects updated at the destination
    pub updated: u64,
    /// Objects deleted at the destination
    pub deleted: u64,
    /// Per-item errors reported by the collaborator
    ///
    /// A non-zero count does not abort the run; only collaborator-level
    /// failures do.
    pub errors: u64,
    /// Total changes, as counted by the collaborator
    pub total_changes: u64,
}

impl ChangeSummary {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub fn has_changes(&self) -> bool {
        self.total_changes > 0
    }
}
