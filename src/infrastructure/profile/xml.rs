//! XML Profile Reader
//!
//! Reads the `.PublishSettings` document format: one or more
//! `publishProfile` elements, each tagged with a `publishMethod`. Only the
//! first entry declaring the remote-sync method is consulted.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use crate::domain::entities::DeploymentProfile;
use crate::domain::ports::ProfileReader;
use crate::error::{SitepushError, SitepushResult};

use super::connection_string::parse_connection_string;

/// The publish method this tool supports, matched case-sensitively
const SUPPORTED_METHOD: &str = "MSDeploy";

/// `ProfileReader` over the XML publish-settings format
#[derive(Debug, Default)]
pub struct XmlProfileReader;

impl XmlProfileReader {
    pub fn new() -> Self {
        Self
    }
}

impl ProfileReader for XmlProfileReader {
    fn read(&self, path: &Path) -> SitepushResult<DeploymentProfile> {
        if !path.exists() {
            return Err(SitepushError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let text = fs::read_to_string(path)?;
        let document = Document::parse(&text).map_err(|e| SitepushError::UnreadableProfile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        // First matching entry wins, in document order
        let profile_node = document
            .descendants()
            .find(|n| {
                n.has_tag_name("publishProfile")
                    && n.attribute("publishMethod") == Some(SUPPORTED_METHOD)
            })
            .ok_or_else(|| SitepushError::InvalidProfile {
                path: path.to_path_buf(),
            })?;

        Ok(parse_profile_node(&profile_node))
    }
}

fn parse_profile_node(node: &Node<'_, '_>) -> DeploymentProfile {
    let attr = |name: &str| node.attribute(name).unwrap_or_default().to_string();

    let database = first_database_entry(node)
        .map(|add| parse_connection_string(add.attribute("connectionString").unwrap_or_default()));

    DeploymentProfile {
        publish_url: attr("publishUrl"),
        destination_app_url: attr("destinationAppUrl"),
        user_name: attr("userName"),
        password: attr("userPWD"),
        site_name: attr("msdeploySite"),
        database,
    }
}

/// First `databases/add` child of the profile, document order
///
/// Additional entries are deliberately ignored.
fn first_database_entry<'a, 'input>(node: &Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    node.children()
        .filter(|n| n.has_tag_name("databases"))
        .flat_map(|databases| databases.children().filter(|n| n.has_tag_name("add")))
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn read_profile(xml: &str) -> SitepushResult<DeploymentProfile> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(xml.as_bytes()).unwrap();
        XmlProfileReader::new().read(file.path())
    }

    const FULL_PROFILE: &str = r#"
<publishData>
  <publishProfile profileName="contoso - FTP" publishMethod="FTP"
      publishUrl="ftp://contoso.example.com" userName="ftpuser" userPWD="ftppass" />
  <publishProfile profileName="contoso - Web Deploy" publishMethod="MSDeploy"
      publishUrl="contoso.scm.example.com"
      destinationAppUrl="https://contoso.example.com"
      userName="$contoso" userPWD="deploypass" msdeploySite="contoso">
    <databases>
      <add name="DefaultConnection"
          connectionString="Data Source=sql.example.com;Initial Catalog=contoso_db;User ID=dbadmin;Password=s3cret" />
      <add name="Secondary"
          connectionString="Data Source=ignored.example.com" />
    </databases>
  </publishProfile>
</publishData>
"#;

    #[test]
    fn selects_first_msdeploy_entry() {
        let profile = read_profile(FULL_PROFILE).unwrap();
        assert_eq!(profile.publish_url, "contoso.scm.example.com");
        assert_eq!(profile.destination_app_url, "https://contoso.example.com");
        assert_eq!(profile.user_name, "$contoso");
        assert_eq!(profile.password, "deploypass");
        assert_eq!(profile.site_name, "contoso");
    }

    #[test]
    fn only_first_database_entry_is_consulted() {
        let profile = read_profile(FULL_PROFILE).unwrap();
        let database = profile.database.unwrap();
        assert_eq!(database.data_source, "sql.example.com");
        assert_eq!(database.initial_catalog, "contoso_db");
    }

    #[test]
    fn missing_method_entry_is_invalid_profile() {
        let xml = r#"
<publishData>
  <publishProfile profileName="ftp only" publishMethod="FTP" publishUrl="ftp://x" />
</publishData>
"#;
        let err = read_profile(xml).unwrap_err();
        assert!(matches!(err, SitepushError::InvalidProfile { .. }));
    }

    #[test]
    fn method_match_is_case_sensitive() {
        let xml = r#"
<publishData>
  <publishProfile publishMethod="msdeploy" publishUrl="x" msdeploySite="s" />
</publishData>
"#;
        let err = read_profile(xml).unwrap_err();
        assert!(matches!(err, SitepushError::InvalidProfile { .. }));
    }

    #[test]
    fn absent_attributes_default_to_empty() {
        let xml = r#"<publishData><publishProfile publishMethod="MSDeploy" /></publishData>"#;
        let profile = read_profile(xml).unwrap();
        assert_eq!(profile.publish_url, "");
        assert_eq!(profile.site_name, "");
        assert!(profile.database.is_none());
    }

    #[test]
    fn malformed_xml_is_unreadable_profile() {
        let err = read_profile("<publishData><publishProfile").unwrap_err();
        assert!(matches!(err, SitepushError::UnreadableProfile { .. }));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = XmlProfileReader::new()
            .read(Path::new("/definitely/not/here.PublishSettings"))
            .unwrap_err();
        assert!(matches!(err, SitepushError::NotFound { .. }));
    }
}
