//! Deployment Variable Resolver
//!
//! Maps the well-known deployment-variable names to values drawn from the
//! profile's site identity and database binding. The mapping is applied as
//! an exact-name override of the parameters an artifact declares itself;
//! parameters with other names pass through untouched.

use crate::domain::entities::{DatabaseBinding, DeploymentProfile};

/// The well-known variable names, in override-table order
pub const VARIABLE_NAMES: [&str; 8] = [
    "IIS Web Application Name",
    "AppPath",
    "DbServer",
    "DbName",
    "DbUsername",
    "DbAdminUsername",
    "DbPassword",
    "DbAdminPassword",
];

/// Resolved deployment variables
///
/// Built once per run from the profile. Lookup is exact-match on the
/// variable name; differently-cased names are deliberately not matched.
#[derive(Debug, Clone, Default)]
pub struct DeploymentVariables {
    site_name: String,
    database: DatabaseBinding,
}

impl DeploymentVariables {
    /// Resolve the variable table against a profile
    ///
    /// Pure: the same profile always yields the same mapping. An absent
    /// database binding resolves the four DB variables to empty strings
    /// rather than failing - the sync call gets the opportunity to reject
    /// blank values instead.
    pub fn resolve(profile: &DeploymentProfile) -> Self {
        Self {
            site_name: profile.site_name.clone(),
            database: profile.database.clone().unwrap_or_default(),
        }
    }

    /// Look up the override value for a parameter name, exact match only
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "IIS Web Application Name" | "AppPath" => &self.site_name,
            "DbServer" => &self.database.data_source,
            "DbName" => &self.database.initial_catalog,
            "DbUsername" | "DbAdminUsername" => &self.database.user_id,
            "DbPassword" | "DbAdminPassword" => &self.database.password,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Iterate the full table as `(name, value)` pairs
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        VARIABLE_NAMES
            .iter()
            .map(|name| (*name, self.get(name).unwrap_or_default()))
    }
}
