//! Selection filtering and tree traversal.

mod selection;
mod walker;

pub use selection::filter_selection;
pub use walker::{walk, DirectoryReader, FsDirectoryReader};
