//! Redundancy filtering of the raw selection.
//!
//! A user picking entries in a file explorer can select both a directory and
//! files inside it. Rendering both would duplicate content, so any entry that
//! is a strict descendant of another selected entry is dropped before the
//! walk starts.

use crate::core_types::FileNode;
use log::debug;

/// Removes redundant entries from a raw selection.
///
/// An entry is removed iff another entry in the same selection is a strict
/// path ancestor of it (delimited at a path separator, so `/foo` never
/// swallows `/foobar`). Exact duplicates are collapsed to their first
/// occurrence. Relative order of the survivors is preserved.
///
/// # Examples
///
/// ```
/// use selcat::core_types::FileNode;
/// use selcat::discovery::filter_selection;
///
/// let selection = vec![
///     FileNode::dir("/proj/src"),
///     FileNode::file("/proj/src/main.rs"),
///     FileNode::file("/proj/README.md"),
/// ];
/// let filtered = filter_selection(&selection);
/// assert_eq!(filtered.len(), 2);
/// assert_eq!(filtered[0].path, std::path::PathBuf::from("/proj/src"));
/// assert_eq!(filtered[1].path, std::path::PathBuf::from("/proj/README.md"));
/// ```
pub fn filter_selection(selection: &[FileNode]) -> Vec<FileNode> {
    let mut result: Vec<FileNode> = Vec::with_capacity(selection.len());

    for (i, entry) in selection.iter().enumerate() {
        let covered = selection
            .iter()
            .any(|other| other.is_ancestor_of(entry));
        if covered {
            debug!(
                "Dropping redundant selection entry '{}' (covered by a selected ancestor)",
                entry.path.display()
            );
            continue;
        }
        // Exact duplicates keep the first occurrence only.
        let duplicate = selection[..i].iter().any(|prior| prior.path == entry.path);
        if duplicate {
            debug!(
                "Dropping duplicate selection entry '{}'",
                entry.path.display()
            );
            continue;
        }
        result.push(entry.clone());
    }

    result
}
