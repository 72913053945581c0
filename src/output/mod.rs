//! Rendering of file blocks and delivery of the final output.

mod file_block;
mod language;
mod writer;

pub use file_block::append_file_block;
pub use language::language_tag;
pub use writer::{deliver_output, ClipboardSink, SystemClipboard};
