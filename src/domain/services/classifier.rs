//! Content Classifier
//!
//! Inspects the source path and decides how it will be shipped: as a
//! package archive, a directory tree, or a single file.

use std::path::Path;

use crate::domain::entities::{ContentDescriptor, ContentKind};
use crate::error::{SitepushError, SitepushResult};

/// Classify a source path
///
/// Rules, in order:
/// 1. path does not exist at all -> error
/// 2. directory -> `Directory`
/// 3. `.zip` extension (case-insensitive) -> `Package`
/// 4. anything else -> `SingleFile`
///
/// The ordering is load-bearing: a directory named `backup.zip` is still a
/// directory, and existence is checked before either.
pub fn classify(source_path: &Path) -> SitepushResult<ContentDescriptor> {
    if !source_path.exists() {
        return Err(SitepushError::NotFound {
            path: source_path.to_path_buf(),
        });
    }

    let kind = if source_path.is_dir() {
        ContentKind::Directory
    } else if has_zip_extension(source_path) {
        ContentKind::Package
    } else {
        ContentKind::SingleFile
    };

    Ok(ContentDescriptor::new(source_path, kind))
}

fn has_zip_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_path_is_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-artifact");

        let err = classify(&missing).unwrap_err();
        assert!(matches!(err, SitepushError::NotFound { .. }));
    }

    #[test]
    fn directory_classifies_as_directory() {
        let dir = tempdir().unwrap();
        let descriptor = classify(dir.path()).unwrap();
        assert_eq!(descriptor.kind, ContentKind::Directory);
    }

    #[test]
    fn directory_named_like_a_package_is_still_a_directory() {
        let dir = tempdir().unwrap();
        let tricky = dir.path().join("site.zip");
        fs::create_dir(&tricky).unwrap();

        let descriptor = classify(&tricky).unwrap();
        assert_eq!(descriptor.kind, ContentKind::Directory);
    }

    #[test]
    fn zip_file_classifies_as_package() {
        let dir = tempdir().unwrap();
        let package = dir.path().join("site.zip");
        fs::write(&package, b"PK").unwrap();

        let descriptor = classify(&package).unwrap();
        assert_eq!(descriptor.kind, ContentKind::Package);
    }

    #[test]
    fn zip_extension_matches_case_insensitively() {
        let dir = tempdir().unwrap();
        let package = dir.path().join("site.ZIP");
        fs::write(&package, b"PK").unwrap();

        let descriptor = classify(&package).unwrap();
        assert_eq!(descriptor.kind, ContentKind::Package);
    }

    #[test]
    fn other_file_classifies_as_single_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("app.exe");
        fs::write(&file, b"MZ").unwrap();

        let descriptor = classify(&file).unwrap();
        assert_eq!(descriptor.kind, ContentKind::SingleFile);
    }

    #[test]
    fn extension_only_matches_the_final_suffix() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("site.zip.bak");
        fs::write(&file, b"x").unwrap();

        let descriptor = classify(&file).unwrap();
        assert_eq!(descriptor.kind, ContentKind::SingleFile);
    }
}
