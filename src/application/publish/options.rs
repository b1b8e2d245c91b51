//! Publish Options
//!
//! Configuration for a single publish run.

use std::path::PathBuf;

/// Options for the publish use case
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Path to the publish-settings document
    pub publish_settings: PathBuf,
    /// Path to the local artifact (file, package, or directory)
    pub source: PathBuf,
    /// Allow the engine to delete destination items absent at the source
    ///
    /// Off by default; the conservative delete policy is the documented
    /// default behavior.
    pub allow_delete: bool,
    /// Resolve and report the plan without opening a session
    pub dry_run: bool,
    /// Ask the engine for verbose tracing
    pub verbose: bool,
}

impl PublishOptions {
    pub fn new(publish_settings: impl Into<PathBuf>, source: impl Into<PathBuf>) -> Self {
        Self {
            publish_settings: publish_settings.into(),
            source: source.into(),
            allow_delete: false,
            dry_run: false,
            verbose: false,
        }
    }

    pub fn with_allow_delete(mut self, allow_delete: bool) -> Self {
        self.allow_delete = allow_delete;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
