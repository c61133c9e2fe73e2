//! Census data structures.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Per-language tally of non-blank lines and contributing files.
///
/// Incremented during the scan, never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStat {
    /// Language label from the extension table
    pub language: String,
    /// Non-blank lines across all contributing files
    pub lines: u64,
    /// Number of files that contributed at least one line
    pub files: u64,
}

impl LanguageStat {
    /// Create an empty stat for a language.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            lines: 0,
            files: 0,
        }
    }
}

/// The per-language tally for a scanned tree.
///
/// Key order is not part of any correctness contract; apportionment fixes
/// its own ordering. Unreadable files encountered during the scan are kept
/// on the side so callers can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    /// Tallies keyed by language label
    pub languages: BTreeMap<String, LanguageStat>,
    /// Files that could not be read; tolerated, counted as zero lines
    pub unreadable: Vec<PathBuf>,
}

impl Census {
    /// Create an empty census.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one file's worth of non-blank lines to a language tally.
    pub fn record(&mut self, language: &str, lines: u64) {
        let stat = self
            .languages
            .entry(language.to_string())
            .or_insert_with(|| LanguageStat::new(language));
        stat.lines += lines;
        stat.files += 1;
    }

    /// Sum of non-blank lines across all languages.
    pub fn grand_total(&self) -> u64 {
        self.languages.values().map(|s| s.lines).sum()
    }

    /// Tally for a language, if observed.
    pub fn get(&self, language: &str) -> Option<&LanguageStat> {
        self.languages.get(language)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates() {
        let mut census = Census::new();
        census.record("Python", 100);
        census.record("Python", 50);
        census.record("Go", 30);

        let python = census.get("Python").unwrap();
        assert_eq!(python.lines, 150);
        assert_eq!(python.files, 2);
        assert_eq!(census.get("Go").unwrap().files, 1);
        assert_eq!(census.grand_total(), 180);
        assert_eq!(census.len(), 2);
    }

    #[test]
    fn test_empty_census() {
        let census = Census::new();
        assert!(census.is_empty());
        assert_eq!(census.grand_total(), 0);
        assert_eq!(census.get("Python"), None);
    }
}
