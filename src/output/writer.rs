// src/output/writer.rs

//! Manages the output destination (clipboard or stdout).
//!
//! The clipboard is modeled as an injected [`ClipboardSink`] trait rather
//! than ambient global state, so tests can substitute an in-memory sink and
//! assert on the delivered text deterministically.

use crate::config::{Config, OutputDestination};
use crate::errors::{Error, Result};
use std::io::Write;

/// An opaque sink accepting the final assembled string.
pub trait ClipboardSink {
    /// Writes `text` to the sink, replacing any previous contents.
    fn write(&mut self, text: &str) -> Result<()>;
}

/// [`ClipboardSink`] backed by the system clipboard via `arboard`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(())
    }
}

/// Delivers the assembled output to the configured destination.
///
/// The sink is not read back or verified afterwards; an empty string is
/// delivered as-is (an empty selection is not an error).
pub fn deliver_output(config: &Config, sink: &mut dyn ClipboardSink, text: &str) -> Result<()> {
    match config.output_destination {
        OutputDestination::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(text.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|e| crate::errors::io_error_with_path(e, "<stdout>"))?;
            Ok(())
        }
        OutputDestination::Clipboard => {
            sink.write(text)?;
            log::info!("Copied {} bytes to clipboard", text.len());
            Ok(())
        }
    }
}
