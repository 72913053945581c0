//! Depth-first expansion of selection roots into file leaves.
//!
//! Traversal is written against the [`DirectoryReader`] abstraction so the
//! walk can be exercised against a synthetic in-memory tree in tests instead
//! of a real filesystem.

use crate::core_types::FileNode;
use log::{debug, warn};
use std::io;
use std::path::Path;

/// Lists the immediate children of a directory, in the order they should be
/// visited.
pub trait DirectoryReader {
    /// Returns the children of `dir` as [`FileNode`]s.
    fn list_children(&self, dir: &Path) -> io::Result<Vec<FileNode>>;
}

/// [`DirectoryReader`] backed by `std::fs`.
///
/// `read_dir` yields entries in an unspecified, platform-dependent order, so
/// children are sorted by file name. This makes repeated runs over an
/// unchanged tree produce byte-identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryReader;

impl DirectoryReader for FsDirectoryReader {
    fn list_children(&self, dir: &Path) -> io::Result<Vec<FileNode>> {
        let mut children = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            children.push(FileNode {
                path: entry.path(),
                is_dir: file_type.is_dir(),
            });
        }
        children.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(children)
    }
}

/// Expands `root` into its file leaves, invoking `emit` for each one.
///
/// Directories are never emitted, only files reachable under them (or the
/// root itself when it is a file). Traversal is depth-first over an explicit
/// worklist, visiting children in the order the reader yields them.
///
/// A directory whose listing fails is logged and skipped; traversal of the
/// rest of the tree continues. Symbolic-link cycles are not detected and can
/// make the walk non-terminating; that is a known limitation.
pub fn walk<R, F>(root: &FileNode, reader: &R, emit: &mut F)
where
    R: DirectoryReader + ?Sized,
    F: FnMut(&FileNode),
{
    let mut stack: Vec<FileNode> = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if !node.is_dir {
            emit(&node);
            continue;
        }
        debug!("Walking directory '{}'", node.path.display());
        match reader.list_children(&node.path) {
            Ok(children) => {
                // Reverse so the first child is popped first.
                for child in children.into_iter().rev() {
                    stack.push(child);
                }
            }
            Err(e) => {
                warn!(
                    "Skipping unreadable directory '{}': {}",
                    node.path.display(),
                    e
                );
            }
        }
    }
}
