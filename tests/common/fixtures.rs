//! Reusable profile fixtures.

/// A publish-settings document with an FTP entry first and the supported
/// remote-sync entry second, including a database binding.
pub const CONTOSO_PROFILE: &str = r#"<publishData>
  <publishProfile profileName="contoso - FTP" publishMethod="FTP"
      publishUrl="ftp://contoso.example.com" userName="ftpuser" userPWD="ftppass" />
  <publishProfile profileName="contoso - Web Deploy" publishMethod="MSDeploy"
      publishUrl="contoso.scm.example.com"
      destinationAppUrl="https://contoso.example.com"
      userName="$contoso" userPWD="deploypass" msdeploySite="contoso">
    <databases>
      <add name="DefaultConnection"
          connectionString="Data Source=sql.example.com;Initial Catalog=contoso_db;User ID=dbadmin;Password=s3cret" />
    </databases>
  </publishProfile>
</publishData>
"#;

/// A profile without any database entries.
pub const CONTOSO_PROFILE_NO_DB: &str = r#"<publishData>
  <publishProfile publishMethod="MSDeploy"
      publishUrl="contoso.scm.example.com"
      destinationAppUrl="https://contoso.example.com"
      userName="$contoso" userPWD="deploypass" msdeploySite="contoso" />
</publishData>
"#;

/// A profile that only declares unsupported publish methods.
pub const FTP_ONLY_PROFILE: &str = r#"<publishData>
  <publishProfile profileName="ftp" publishMethod="FTP"
      publishUrl="ftp://contoso.example.com" userName="ftpuser" userPWD="ftppass" />
</publishData>
"#;
