//! Defines core data structures used throughout the pipeline.

use std::path::{Path, PathBuf};

/// Represents one filesystem entry at the time of invocation.
///
/// Nodes are cheap handles: children of a directory are not stored here but
/// listed lazily through a [`DirectoryReader`](crate::discovery::DirectoryReader)
/// at traversal time. The listing is a live read of the filesystem; there is
/// no snapshot consistency guarantee across a traversal.
///
/// # Examples
///
/// ```
/// use selcat::core_types::FileNode;
///
/// let node = FileNode::file("/project/src/main.rs");
/// assert!(!node.is_dir);
/// assert_eq!(node.extension(), Some("rs".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    /// The absolute path to the entry on the filesystem.
    pub path: PathBuf,
    /// Whether this entry is a directory.
    pub is_dir: bool,
}

impl FileNode {
    /// Creates a file (leaf) node.
    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    /// Creates a directory node.
    pub fn dir<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }

    /// Returns the lowercase file extension without the dot, if any.
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }

    /// Returns true if `self` is a strict path ancestor of `other`.
    ///
    /// The check is component-wise, so `/foo` is not treated as an ancestor
    /// of `/foobar`.
    pub fn is_ancestor_of(&self, other: &FileNode) -> bool {
        self.path != other.path && other.path.starts_with(&self.path)
    }

    /// Formats the path for display in block headers.
    ///
    /// Uses `/` as the separator for consistent output, even on Windows.
    pub fn display_path(&self) -> String {
        display_path(&self.path)
    }
}

/// Formats a path for display, normalizing separators to `/`.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
