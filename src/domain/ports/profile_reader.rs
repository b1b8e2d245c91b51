//! Profile Reader Port
//!
//! Abstracts how a publish-settings document becomes a `DeploymentProfile`,
//! so the publish use case does not care about the document format.

use std::path::Path;

use crate::domain::entities::DeploymentProfile;
use crate::error::SitepushResult;

/// Trait for reading deployment profiles
pub trait ProfileReader {
    /// Parse the document at `path` into a profile
    ///
    /// Fails with `NotFound` if the file is missing, `UnreadableProfile` if
    /// it cannot be parsed, and `InvalidProfile` if no entry declares the
    /// supported publish method. No partial profile is ever returned.
    fn read(&self, path: &Path) -> SitepushResult<DeploymentProfile>;
}
