//! Destination Path Builder
//!
//! Computes where an artifact lands on the remote host, and the sync-service
//! endpoint address the transfer goes through.

use crate::domain::entities::{ContentDescriptor, ContentKind};

/// Compute the remote destination path
///
/// Base path is the site name. Single files land under the site as
/// `site/<filename>`; packages and directories use the site path unmodified.
pub fn destination_path(site_name: &str, descriptor: &ContentDescriptor) -> String {
    match descriptor.kind {
        ContentKind::SingleFile => match descriptor.file_name() {
            Some(name) => format!("{}/{}", site_name, name),
            None => site_name.to_string(),
        },
        ContentKind::Package | ContentKind::Directory => site_name.to_string(),
    }
}

/// Compute the remote sync-service endpoint URL
///
/// The externally-defined form the service listens on:
/// `https://{host}/msdeploy.axd?site={site}`.
pub fn endpoint_url(publish_url: &str, site_name: &str) -> String {
    format!("https://{}/msdeploy.axd?site={}", publish_url, site_name)
}
