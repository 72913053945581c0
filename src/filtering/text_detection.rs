// src/filtering/text_detection.rs

use crate::core_types::FileNode;
use content_inspector::ContentType;
use std::{fs::File, io::Read, str};

// Buffer size for content type detection.
const READ_BUFFER_SIZE: usize = 1024;

/// The binary/text classification oracle.
///
/// The pipeline treats this as an opaque boolean classifier: implementations
/// may use content sniffing, an extension allow-list, or both. Files
/// classified as non-text are skipped entirely, with no placeholder emitted.
pub trait TextDetector {
    /// Returns whether the file is likely text.
    ///
    /// # Errors
    /// Returns an `Err` on I/O error (e.g., file not found, permission denied).
    fn is_text(&self, node: &FileNode) -> std::io::Result<bool>;
}

/// [`TextDetector`] that sniffs the head of the file with `content_inspector`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentDetector;

impl TextDetector for ContentDetector {
    fn is_text(&self, node: &FileNode) -> std::io::Result<bool> {
        let mut file = File::open(&node.path)?;
        let mut buffer = [0; READ_BUFFER_SIZE];
        let bytes_read = file.read(&mut buffer)?;
        Ok(buffer_is_text(&buffer[..bytes_read]))
    }
}

/// Checks whether a byte buffer is likely text.
///
/// Uses `content_inspector` for the heuristic check and verifies UTF-8
/// validity when the detected type is plain UTF-8.
///
/// # Examples
/// ```
/// use selcat::filtering::buffer_is_text;
///
/// assert!(buffer_is_text(b"This is valid UTF-8 text."));
/// assert!(!buffer_is_text(b"This contains a null byte \0."));
/// ```
pub fn buffer_is_text(buffer: &[u8]) -> bool {
    match content_inspector::inspect(buffer) {
        ContentType::UTF_8_BOM => true,
        ContentType::UTF_8 => str::from_utf8(buffer).is_ok(),
        ContentType::BINARY => false,
        // Treat other encodings conservatively as non-text.
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Write};
    use tempfile::tempdir;

    #[test]
    fn test_buffer_detect_utf8_text() {
        assert!(buffer_is_text(b"This is plain UTF-8 text."));
    }

    #[test]
    fn test_buffer_detect_utf8_bom_text() {
        assert!(buffer_is_text(&[0xEF, 0xBB, 0xBF, b'h', b'i']));
    }

    #[test]
    fn test_buffer_detect_binary_null_byte() {
        assert!(!buffer_is_text(b"Binary data with a \0 null byte."));
    }

    #[test]
    fn test_buffer_detect_invalid_utf8_sequence() {
        // "Hell\x80o" - 0x80 is an invalid UTF-8 start byte
        assert!(!buffer_is_text(&[0x48, 0x65, 0x6c, 0x6c, 0x80, 0x6f]));
    }

    #[test]
    fn test_buffer_detect_empty() {
        assert!(buffer_is_text(b""));
    }

    #[test]
    fn test_detect_text_file() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("utf8.txt");
        fs::write(&file_path, "This is plain UTF-8 text.")?;
        assert!(ContentDetector.is_text(&FileNode::file(&file_path))?);
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_detect_bom_file() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("utf8_bom.txt");
        let mut file = fs::File::create(&file_path)?;
        file.write_all(&[0xEF, 0xBB, 0xBF])?;
        file.write_all(b"Text with UTF-8 BOM.")?;
        drop(file);
        assert!(ContentDetector.is_text(&FileNode::file(&file_path))?);
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_detect_png_file() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("image.png");
        // PNG magic bytes
        fs::write(&file_path, [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])?;
        assert!(!ContentDetector.is_text(&FileNode::file(&file_path))?);
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_detect_non_existent_file() {
        let node = FileNode::file("non_existent_file_for_text_detection.txt");
        assert!(ContentDetector.is_text(&node).is_err());
    }
}
