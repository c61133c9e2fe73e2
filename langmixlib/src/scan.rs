//! Directory traversal and census building.
//!
//! The walk prunes excluded directories structurally: an excluded subtree is
//! never opened, not merely filtered from the result. Discovered files are
//! sorted before counting so repeated scans of the same tree are
//! deterministic.

use std::collections::BTreeSet;
use std::path::Path;

use walkdir::WalkDir;

use crate::census::Census;
use crate::counter::count_nonblank_file;
use crate::error::LangmixError;
use crate::languages::LanguageMap;
use crate::Result;

/// Directory names pruned by default: VCS metadata, editor state, package
/// caches, build output, and previously generated synthetic files.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    ".idea",
    ".vscode",
    "__pycache__",
    "node_modules",
    ".venv",
    "venv",
    "env",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
    "target",
    "generated",
];

/// Options for building a census.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory names to prune during traversal
    pub exclude: BTreeSet<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ScanOptions {
    /// Create options with the default exclude set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options with no excluded directories.
    pub fn without_default_excludes() -> Self {
        Self {
            exclude: BTreeSet::new(),
        }
    }

    /// Add a directory name to prune.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude.insert(name.into());
        self
    }

    /// Add several directory names to prune.
    pub fn exclude_many<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.exclude.insert(name.into());
        }
        self
    }

    /// Whether a directory name is pruned.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.contains(name)
    }
}

/// Walk `root` and build a per-language census of non-blank lines.
///
/// Files with no recognized language are skipped entirely. Files whose
/// non-blank count is zero (empty, whitespace-only, or binary content that
/// decodes to nothing) contribute to neither `lines` nor `files`. A file
/// that cannot be read is recorded on [`Census::unreadable`] and contributes
/// zero lines; only a missing root aborts the scan.
pub fn scan_tree(
    root: impl AsRef<Path>,
    map: &LanguageMap,
    options: &ScanOptions,
) -> Result<Census> {
    let root = root.as_ref();

    if !root.is_dir() {
        return Err(LangmixError::RootNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        // Always descend into the root itself
        if e.depth() == 0 {
            return true;
        }
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !options.is_excluded(name);
        }
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();
        if path.is_file() && map.classify(path).is_some() {
            files.push(path.to_path_buf());
        }
    }

    // Sort for deterministic accumulation order
    files.sort();

    let mut census = Census::new();
    for path in files {
        let language = match map.classify(&path) {
            Some(label) => label.to_string(),
            None => continue,
        };
        match count_nonblank_file(&path) {
            Ok(0) => {}
            Ok(lines) => census.record(&language, lines),
            Err(_) => census.unreadable.push(path),
        }
    }

    Ok(census)
}
