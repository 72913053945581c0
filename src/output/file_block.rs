use crate::core_types::FileNode;
use crate::output::language::language_tag;
use log::debug;

/// Appends a single file's rendered block to the output buffer.
///
/// Block layout, newline-sensitive:
///
/// ````text
/// <absolute path>:
/// ```<language-tag>
/// <raw file content>
/// ```
///
/// ````
///
/// with a blank line after the closing fence to separate blocks. Content that
/// does not end with a newline gets one so the closing fence sits on its own
/// line. A read or decode failure is substituted inline as
/// `Error reading file: <message>`; it never aborts the overall run.
pub fn append_file_block(out: &mut String, node: &FileNode) {
    let tag = node
        .extension()
        .map(|ext| language_tag(&ext))
        .unwrap_or("");
    debug!(
        "Rendering block for '{}' (tag: '{}')",
        node.path.display(),
        tag
    );

    out.push_str(&node.display_path());
    out.push_str(":\n");
    out.push_str("```");
    out.push_str(tag);
    out.push('\n');

    let content = read_file_content(node);
    out.push_str(&content);
    if !content.is_empty() && !content.ends_with('\n') {
        out.push('\n');
    }

    out.push_str("```\n\n");
}

/// Reads a file fully and decodes it as UTF-8.
///
/// On any failure the returned string is the inline error substitution, not
/// the file's bytes.
fn read_file_content(node: &FileNode) -> String {
    match std::fs::read(&node.path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => format!("Error reading file: {}", e),
        },
        Err(e) => format!("Error reading file: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_block_basic() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("Test.java");
        fs::write(&path, "public class Test {}")?;

        let mut out = String::new();
        append_file_block(&mut out, &FileNode::file(&path));

        let expected = format!(
            "{}:\n```java\npublic class Test {{}}\n```\n\n",
            path.display()
        );
        assert_eq!(out, expected);
        Ok(())
    }

    #[test]
    fn test_block_unknown_extension_bare_fence() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("Test.xyz");
        fs::write(&path, "mystery")?;

        let mut out = String::new();
        append_file_block(&mut out, &FileNode::file(&path));

        let expected = format!("{}:\n```\nmystery\n```\n\n", path.display());
        assert_eq!(out, expected);
        Ok(())
    }

    #[test]
    fn test_block_no_extension_bare_fence() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("Makefile");
        fs::write(&path, "all: build\n")?;

        let mut out = String::new();
        append_file_block(&mut out, &FileNode::file(&path));

        let expected = format!("{}:\n```\nall: build\n```\n\n", path.display());
        assert_eq!(out, expected);
        Ok(())
    }

    #[test]
    fn test_block_empty_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("empty.txt");
        fs::write(&path, "")?;

        let mut out = String::new();
        append_file_block(&mut out, &FileNode::file(&path));

        let expected = format!("{}:\n```text\n```\n\n", path.display());
        assert_eq!(out, expected);
        Ok(())
    }

    #[test]
    fn test_block_content_with_trailing_newline_not_doubled() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("a.txt");
        fs::write(&path, "line\n")?;

        let mut out = String::new();
        append_file_block(&mut out, &FileNode::file(&path));

        let expected = format!("{}:\n```text\nline\n```\n\n", path.display());
        assert_eq!(out, expected);
        Ok(())
    }

    #[test]
    fn test_block_read_error_substituted_inline() {
        let node = FileNode::file("/definitely/not/a/real/file.txt");
        let mut out = String::new();
        append_file_block(&mut out, &node);

        assert!(out.starts_with("/definitely/not/a/real/file.txt:\n```text\n"));
        assert!(out.contains("Error reading file: "));
        assert!(out.ends_with("```\n\n"));
    }

    #[test]
    fn test_block_invalid_utf8_substituted_inline() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("bad.txt");
        // Invalid UTF-8 start byte in an otherwise texty file.
        fs::write(&path, [b'h', b'i', 0x80])?;

        let mut out = String::new();
        append_file_block(&mut out, &FileNode::file(&path));

        assert!(out.contains("Error reading file: "));
        Ok(())
    }
}
