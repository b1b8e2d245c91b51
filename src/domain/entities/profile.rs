//! Deployment Profile
//!
//! The parsed form of a publish-settings entry. Built once per run by a
//! `ProfileReader` and never mutated afterwards.

/// Database binding extracted from the first `databases/add` entry of a
/// publish profile
///
/// Only the first entry is ever consulted; additional entries are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseBinding {
    /// `Data Source` attribute of the connection string
    pub data_source: String,
    /// `Initial Catalog` attribute of the connection string
    pub initial_catalog: String,
    /// `User ID` attribute of the connection string
    pub user_id: String,
    /// `Password` attribute of the connection string
    pub password: String,
}

/// A deployment profile resolved from a publish-settings document
///
/// No field is individually mandatory at parse time - downstream consumers
/// may fail instead. Credentials are never logged.
#[derive(Debug, Clone, Default)]
pub struct DeploymentProfile {
    /// Remote host to publish to (e.g. `contoso.scm.example.com`)
    pub publish_url: String,
    /// Informational URL of the deployed application
    pub destination_app_url: String,
    /// Username for basic authentication
    pub user_name: String,
    /// Password for basic authentication
    pub password: String,
    /// Remote site identifier; doubles as the default destination path segment
    pub site_name: String,
    /// Database binding, present only if the profile declares a database entry
    pub database: Option<DatabaseBinding>,
}

impl DeploymentProfile {
    /// The URL shown in the start-of-deployment message
    ///
    /// Prefers the informational app URL; falls back to the publish host
    /// when the profile does not carry one.
    pub fn display_url(&self) -> &str {
        if self.destination_app_url.is_empty() {
            &self.publish_url
        } else {
            &self.destination_app_url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_url_prefers_destination_app_url() {
        let profile = DeploymentProfile {
            publish_url: "contoso.scm.example.com".to_string(),
            destination_app_url: "https://contoso.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.display_url(), "https://contoso.example.com");
    }

    #[test]
    fn display_url_falls_back_to_publish_url() {
        let profile = DeploymentProfile {
            publish_url: "contoso.scm.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.display_url(), "contoso.scm.example.com");
    }
}
