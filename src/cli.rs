// src/cli.rs

use clap::Parser;

/// Concatenates a selection of files and directories into fenced Markdown
/// blocks and copies the result to the system clipboard.
///
/// selcat takes the paths you would pick in a file explorer, drops entries
/// that are already covered by a selected ancestor directory, walks the
/// remaining roots depth-first, and emits one fenced block per text file
/// (binary files are skipped entirely). The assembled text is written to the
/// clipboard, ready for pasting into a chat tool or a document.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files and/or directories to include. Order is preserved; entries that
    /// are descendants of another selected entry are dropped.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Print the assembled output to stdout instead of the clipboard.
    #[arg(short = 's', long, action = clap::ArgAction::SetTrue)]
    pub stdout: bool,
}
