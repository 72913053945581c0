//! Defines the `Config` struct built from the CLI arguments.
//!
//! This module resolves the raw selection paths into absolute [`FileNode`]
//! roots and records where the final output should go, making the settings
//! available to the rest of the pipeline in a structured way.

use crate::cli::Cli;
use crate::core_types::FileNode;
use crate::errors::Error;
use std::path::PathBuf;

/// Specifies where the assembled output string is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDestination {
    /// Write to the system clipboard (the default).
    Clipboard,
    /// Print to stdout.
    Stdout,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The selection roots, resolved to absolute paths, in argument order.
    pub selection: Vec<FileNode>,
    /// Where the final output string goes.
    pub output_destination: OutputDestination,
}

impl TryFrom<Cli> for Config {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let mut selection = Vec::with_capacity(cli.paths.len());
        for raw in &cli.paths {
            selection.push(resolve_selection_path(raw)?);
        }
        Ok(Config {
            selection,
            output_destination: if cli.stdout {
                OutputDestination::Stdout
            } else {
                OutputDestination::Clipboard
            },
        })
    }
}

impl Config {
    #[doc(hidden)]
    pub fn new_for_test(selection: Vec<FileNode>) -> Self {
        Config {
            selection,
            output_destination: OutputDestination::Stdout,
        }
    }
}

/// Resolves a raw CLI path into an absolute [`FileNode`].
///
/// Selection entries come from something like a file explorer, so a path that
/// does not exist is a configuration error rather than a per-file condition.
fn resolve_selection_path(raw: &str) -> Result<FileNode, Error> {
    let path = PathBuf::from(raw);
    let absolute = std::fs::canonicalize(&path)
        .map_err(|e| Error::Config(format!("path '{}' could not be resolved: {}", raw, e)))?;
    let is_dir = absolute.is_dir();
    log::debug!(
        "Resolved selection entry '{}' -> '{}' (dir: {})",
        raw,
        absolute.display(),
        is_dir
    );
    Ok(FileNode {
        path: absolute,
        is_dir,
    })
}
