//! `selcat` is a library and command-line tool that concatenates a selection
//! of files and directories into a single block of fenced Markdown text and
//! copies it to the system clipboard.
//!
//! It is built for assembling source context quickly (e.g., for pasting into
//! a chat tool) from the set of paths you would pick in a file explorer.
//!
//! As a library, it provides a single synchronous pipeline:
//! 1.  **Filter**: drop selection entries already covered by a selected
//!     ancestor directory.
//! 2.  **Walk**: expand each surviving root depth-first into file leaves.
//! 3.  **Classify**: skip files detected as binary.
//! 4.  **Render**: emit one path-headed, language-tagged fenced block per
//!     text file.
//!
//! The traversal source ([`DirectoryReader`]), binary oracle
//! ([`TextDetector`]) and output sink ([`ClipboardSink`]) are all traits, so
//! every stage can be exercised against in-memory doubles.
//!
//! # Example: Library Usage
//!
//! ```
//! use selcat::{generate, FileNode};
//! use selcat::discovery::FsDirectoryReader;
//! use selcat::filtering::ContentDetector;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("file1.txt"), "Hello, world!").unwrap();
//!
//! let selection = vec![FileNode::dir(temp_dir.path())];
//! let output = generate(&selection, &FsDirectoryReader, &ContentDetector);
//!
//! assert!(output.contains("```text\nHello, world!\n```"));
//! ```

pub mod cli;
pub mod config;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;

// Re-export key public types for easier use as a library
pub use config::{Config, OutputDestination};
pub use core_types::FileNode;
pub use errors::{Error, Result};

use discovery::{filter_selection, walk, DirectoryReader};
use filtering::TextDetector;
use output::{append_file_block, ClipboardSink};

/// Assembles the output string for a selection.
///
/// Runs the filter → walk → classify → render pipeline to completion on the
/// calling thread and returns the concatenated blocks. An empty selection
/// yields an empty string. Per-file failures are substituted inline and never
/// abort the run.
///
/// If the binary classification itself fails (the file vanished, permission
/// error), the file is kept so the renderer surfaces the read error inline
/// instead of silently dropping it.
pub fn generate(
    selection: &[FileNode],
    reader: &dyn DirectoryReader,
    detector: &dyn TextDetector,
) -> String {
    let roots = filter_selection(selection);
    log::debug!(
        "Selection filtered: {} of {} entries remain",
        roots.len(),
        selection.len()
    );

    let mut out = String::new();
    for root in &roots {
        walk(root, reader, &mut |node| {
            let include = match detector.is_text(node) {
                Ok(is_text) => is_text,
                Err(e) => {
                    log::warn!(
                        "Could not classify '{}' ({}); including it so the read error is reported inline",
                        node.path.display(),
                        e
                    );
                    true
                }
            };
            if include {
                append_file_block(&mut out, node);
            } else {
                log::debug!("Skipping binary file '{}'", node.path.display());
            }
        });
    }
    out
}

/// Runs the full pipeline and delivers the result to the configured sink.
///
/// This is what the binary calls: generate the output string for the
/// selection in `config`, then hand it to the clipboard sink (or stdout).
pub fn run(
    config: &Config,
    reader: &dyn DirectoryReader,
    detector: &dyn TextDetector,
    sink: &mut dyn ClipboardSink,
) -> Result<()> {
    let text = generate(&config.selection, reader, detector);
    output::deliver_output(config, sink, &text)
}
