//! Extension-to-language classification table.
//!
//! Classification is purely name-based: the lowercased file extension is
//! looked up in an ordered table. No file contents are ever inspected, so
//! the labels are only as good as the table — close enough to what GitHub
//! Linguist would infer, which is all the census needs.

use std::path::Path;

use crate::error::LangmixError;
use crate::Result;

/// Extensions whose languages use `#` line comments; everything else gets `//`.
const HASH_COMMENT_EXTS: &[&str] = &[
    ".py", ".sh", ".bash", ".zsh", ".yml", ".yaml", ".md", ".rst", ".txt", ".proto",
];

/// Built-in table used by [`LanguageMap::default`].
const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    (".py", "Python"),
    (".js", "JavaScript"),
    (".jsx", "JavaScript"),
    (".ts", "TypeScript"),
    (".tsx", "TypeScript"),
    (".rs", "Rust"),
    (".go", "Go"),
    (".sh", "Shell"),
    (".bash", "Shell"),
    (".zsh", "Shell"),
    (".yml", "YAML"),
    (".yaml", "YAML"),
    (".json", "JSON"),
    (".toml", "TOML"),
    (".md", "Markdown"),
    (".rst", "reStructuredText"),
    (".txt", "Text"),
    (".lock", "Text"),
    (".proto", "Protocol Buffers"),
];

/// Return the line-comment marker for a file extension.
pub fn comment_marker(ext: &str) -> &'static str {
    if HASH_COMMENT_EXTS.contains(&ext) {
        "#"
    } else {
        "//"
    }
}

/// Ordered extension-to-language table.
///
/// Insertion order matters in one place: when several extensions map to the
/// same language, the first one registered is that language's representative
/// extension for synthetic files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMap {
    entries: Vec<(String, String)>,
}

impl Default for LanguageMap {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|&(ext, label)| (ext.to_string(), label.to_string()))
                .collect(),
        }
    }
}

impl LanguageMap {
    /// Create a table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a table from `(extension, label)` pairs, validating each entry.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut map = Self::empty();
        for (ext, label) in pairs {
            map.add(ext, label)?;
        }
        Ok(map)
    }

    /// Register an extension, replacing any existing entry for it.
    ///
    /// Extensions must start with `.` and name at least one character;
    /// labels must be non-empty.
    pub fn add(&mut self, ext: impl Into<String>, label: impl Into<String>) -> Result<()> {
        let ext = ext.into().to_ascii_lowercase();
        let label = label.into();

        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(LangmixError::InvalidLanguageMap(format!(
                "extension '{ext}' must start with '.' and name at least one character"
            )));
        }
        if label.trim().is_empty() {
            return Err(LangmixError::InvalidLanguageMap(format!(
                "empty language label for extension '{ext}'"
            )));
        }

        if let Some(entry) = self.entries.iter_mut().find(|(e, _)| *e == ext) {
            entry.1 = label;
        } else {
            self.entries.push((ext, label));
        }
        Ok(())
    }

    /// Language label for a path, from its lowercased extension.
    pub fn classify(&self, path: &Path) -> Option<&str> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        let dotted = format!(".{ext}");
        self.entries
            .iter()
            .find(|(e, _)| *e == dotted)
            .map(|(_, label)| label.as_str())
    }

    /// First extension registered for a language.
    pub fn representative_extension(&self, language: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, label)| label == language)
            .map(|(ext, _)| ext.as_str())
    }

    /// Iterate over `(extension, label)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(ext, label)| (ext.as_str(), label.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_extensions() {
        let map = LanguageMap::default();
        assert_eq!(map.classify(Path::new("src/app.py")), Some("Python"));
        assert_eq!(map.classify(Path::new("lib.rs")), Some("Rust"));
        assert_eq!(map.classify(Path::new("Cargo.lock")), Some("Text"));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let map = LanguageMap::default();
        assert_eq!(map.classify(Path::new("SCRIPT.PY")), Some("Python"));
        assert_eq!(map.classify(Path::new("config.YAML")), Some("YAML"));
    }

    #[test]
    fn test_classify_unknown_or_missing_extension() {
        let map = LanguageMap::default();
        assert_eq!(map.classify(Path::new("binary.exe")), None);
        assert_eq!(map.classify(Path::new("Makefile")), None);
        assert_eq!(map.classify(Path::new(".gitignore")), None);
    }

    #[test]
    fn test_representative_extension_first_wins() {
        let map = LanguageMap::default();
        // .js is registered before .jsx
        assert_eq!(map.representative_extension("JavaScript"), Some(".js"));
        assert_eq!(map.representative_extension("Shell"), Some(".sh"));
        assert_eq!(map.representative_extension("Fortran"), None);
    }

    #[test]
    fn test_add_replaces_existing_entry() {
        let mut map = LanguageMap::default();
        map.add(".ts", "TSX").unwrap();
        assert_eq!(map.classify(Path::new("a.ts")), Some("TSX"));
        // Position preserved, no duplicate entry
        assert_eq!(map.len(), LanguageMap::default().len());
    }

    #[test]
    fn test_add_rejects_malformed_entries() {
        let mut map = LanguageMap::empty();
        assert!(map.add("py", "Python").is_err());
        assert!(map.add(".", "Python").is_err());
        assert!(map.add(".py", "  ").is_err());
        assert!(map.is_empty());
    }

    #[test]
    fn test_from_pairs() {
        let map = LanguageMap::from_pairs([(".vue", "Vue"), (".svelte", "Svelte")]).unwrap();
        assert_eq!(map.classify(Path::new("app.vue")), Some("Vue"));
        assert_eq!(map.len(), 2);

        assert!(LanguageMap::from_pairs([("vue", "Vue")]).is_err());
    }

    #[test]
    fn test_comment_markers() {
        assert_eq!(comment_marker(".py"), "#");
        assert_eq!(comment_marker(".yaml"), "#");
        assert_eq!(comment_marker(".rs"), "//");
        assert_eq!(comment_marker(".js"), "//");
        assert_eq!(comment_marker(".lock"), "//");
    }
}
