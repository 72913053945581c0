// src/output/language.rs

//! Static mapping from file extensions to fence language tags.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static LANGUAGE_TAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("java", "java"),
        ("kt", "kotlin"),
        ("kts", "kotlin"),
        ("py", "python"),
        ("js", "javascript"),
        ("ts", "typescript"),
        ("html", "html"),
        ("xml", "xml"),
        ("json", "json"),
        ("yaml", "yaml"),
        ("yml", "yaml"),
        ("md", "markdown"),
        ("css", "css"),
        ("scss", "scss"),
        ("sql", "sql"),
        ("cs", "csharp"),
        ("php", "php"),
        ("rb", "ruby"),
        ("go", "go"),
        ("rs", "rust"),
        ("sh", "bash"),
        ("bat", "batch"),
        ("ps1", "powershell"),
        ("c", "c"),
        ("cpp", "cpp"),
        ("h", "c"),
        ("hpp", "cpp"),
        ("swift", "swift"),
        ("dart", "dart"),
        ("properties", "properties"),
        ("gradle", "gradle"),
        ("txt", "text"),
    ])
});

/// Returns the fence language tag for a lowercase extension (without the
/// dot), or the empty string for unmapped extensions.
///
/// # Examples
/// ```
/// use selcat::output::language_tag;
///
/// assert_eq!(language_tag("kt"), "kotlin");
/// assert_eq!(language_tag("rs"), "rust");
/// assert_eq!(language_tag("xyz"), "");
/// ```
pub fn language_tag(extension: &str) -> &'static str {
    LANGUAGE_TAGS.get(extension).copied().unwrap_or("")
}
