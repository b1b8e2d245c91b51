//! Publish Result
//!
//! What a completed (or planned) publish run reports back.

use crate::domain::entities::{ChangeSummary, ContentKind};

/// Result of a publish run
#[derive(Debug, Clone)]
pub struct PublishResult {
    /// Change summary returned by the sync collaborator
    ///
    /// All zeros for a dry run.
    pub summary: ChangeSummary,
    /// How the source was classified
    pub kind: ContentKind,
    /// Remote path the artifact was synchronized to
    pub destination_path: String,
    /// URL shown to the operator for this deployment
    pub destination_url: String,
    /// Sync-service endpoint the transfer went through
    pub endpoint: String,
    /// Names of the declared parameters that were overridden
    pub applied_parameters: Vec<String>,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl PublishResult {
    /// Partial item failures were reported inside the summary
    ///
    /// These do not fail the run; they are surfaced in the counters.
    pub fn has_item_errors(&self) -> bool {
        self.summary.has_errors()
    }
}
