//! Content Descriptor
//!
//! Classification of the local source artifact. Computed once from
//! filesystem inspection; the classification is final for the run.

use std::path::{Path, PathBuf};

/// Kind of source content being published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// A `.zip` package archive
    Package,
    /// A directory tree
    Directory,
    /// Any other single file
    SingleFile,
}

impl ContentKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Directory => "directory",
            Self::SingleFile => "file",
        }
    }
}

/// A classified source artifact
#[derive(Debug, Clone)]
pub struct ContentDescriptor {
    /// Path to the local artifact
    pub source_path: PathBuf,
    /// What the artifact is
    pub kind: ContentKind,
}

impl ContentDescriptor {
    pub fn new(source_path: impl Into<PathBuf>, kind: ContentKind) -> Self {
        Self {
            source_path: source_path.into(),
            kind,
        }
    }

    /// Final path segment of the source, name only
    ///
    /// Used as the destination suffix for single-file deployments.
    pub fn file_name(&self) -> Option<&str> {
        self.source_path.file_name().and_then(|n| n.to_str())
    }

    pub fn path(&self) -> &Path {
        &self.source_path
    }
}
