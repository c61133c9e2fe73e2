//! Synthetic file rendering and writing.
//!
//! Rendering is pure: given an allocation, a language table, and a seed it
//! produces in-memory artifacts, byte-identical across runs for the same
//! inputs. Writing is a separate step so callers can inspect or test the
//! content without touching the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LangmixError;
use crate::languages::{comment_marker, LanguageMap};
use crate::portion::Allocation;
use crate::Result;

/// Fixed header lines at the top of every synthetic file, counted as part
/// of that file's allocation.
pub const HEADER_LINES: usize = 4;

/// Extension used for languages with no registered extension.
const FALLBACK_EXTENSION: &str = ".txt";

/// A rendered synthetic artifact, not yet written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticFile {
    /// Deterministic filename: ordinal, slug, representative extension
    pub filename: String,
    /// Language this artifact contributes lines for
    pub language: String,
    /// Number of non-blank lines in `content`
    pub lines: u64,
    /// Full file content, trailing newline included
    pub content: String,
}

/// xorshift64* token generator.
///
/// Emitted content must be byte-stable across platforms and toolchain
/// versions, so the generator is pinned here instead of depending on an
/// external stream that may change between crate releases.
#[derive(Debug, Clone)]
struct TokenRng {
    state: u64,
}

impl TokenRng {
    fn new(seed: u64) -> Self {
        // xorshift state must be non-zero
        Self {
            state: seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Draw from `lo..=hi` (small ranges only).
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }

    /// One lowercase pseudo-word of 3..=8 letters.
    fn word(&mut self) -> String {
        let len = self.range(3, 8) as usize;
        (0..len)
            .map(|_| (b'a' + (self.next_u64() % 26) as u8) as char)
            .collect()
    }

    /// `count` pseudo-words joined by single spaces.
    fn words(&mut self, count: u64) -> String {
        let mut tokens = Vec::with_capacity(count as usize);
        for _ in 0..count {
            tokens.push(self.word());
        }
        tokens.join(" ")
    }
}

/// Lowercase a language label into a filename slug.
///
/// Non-alphanumeric characters become underscores; leading and trailing
/// underscores are trimmed; an empty result falls back to "unknown".
pub fn slugify(language: &str) -> String {
    let slug: String = language
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "unknown".to_string()
    } else {
        slug.to_string()
    }
}

/// Render one synthetic artifact per language with a non-zero allocation.
///
/// Languages are visited in sorted label order with a 1-based ordinal that
/// covers every allocation key, so a language's filename index stays stable
/// even when its budget drops to zero. A single generator is seeded once
/// from `seed` before the loop; identical `(allocation, seed)` inputs yield
/// byte-identical output.
pub fn render_synthetic(
    allocation: &Allocation,
    map: &LanguageMap,
    requested_total: u64,
    seed: u64,
) -> Vec<SyntheticFile> {
    let mut rng = TokenRng::new(seed);
    let mut out = Vec::new();

    for (index, (language, &lines)) in allocation.iter().enumerate() {
        let ordinal = index + 1;
        if lines == 0 {
            continue;
        }

        let ext = map
            .representative_extension(language)
            .unwrap_or(FALLBACK_EXTENSION);
        let filename = format!(
            "{ordinal:02}_{slug}_language_representation{ext}",
            slug = slugify(language)
        );
        let content = render_content(language, comment_marker(ext), lines, requested_total, &mut rng);

        out.push(SyntheticFile {
            filename,
            language: language.clone(),
            lines,
            content,
        });
    }

    out
}

/// Render header plus filler lines; exactly `lines` non-blank lines total.
fn render_content(
    language: &str,
    marker: &str,
    lines: u64,
    requested_total: u64,
    rng: &mut TokenRng,
) -> String {
    let header = [
        format!("{marker} Synthetic file balancing language statistics for {language}."),
        format!("{marker} This tree mixes several languages; the lines below keep the"),
        format!("{marker} per-language distribution representative after generation."),
        format!("{marker} Total synthetic lines requested across languages: {requested_total}"),
    ];

    let mut content = String::new();
    // When the allocation is smaller than the header, truncate the header
    // instead of emitting filler
    for line in header.iter().take(lines as usize) {
        content.push_str(line);
        content.push('\n');
    }

    let filler = lines.saturating_sub(HEADER_LINES as u64);
    for _ in 0..filler {
        let count = rng.range(3, 8);
        let tokens = rng.words(count);
        content.push_str(&format!("{marker} {language} filler line: {tokens}\n"));
    }

    content
}

/// Write rendered artifacts under `dir`, creating it if needed.
///
/// Each file is written with a scoped handle closed on all exit paths. A
/// failure is surfaced for the specific file; artifacts already written
/// stay on disk, there is no rollback.
pub fn write_synthetic(dir: impl AsRef<Path>, files: &[SyntheticFile]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.filename);
        fs::write(&path, &file.content).map_err(|source| LangmixError::FileWrite {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::count_nonblank_str;
    use tempfile::tempdir;

    fn allocation(pairs: &[(&str, u64)]) -> Allocation {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Python"), "python");
        assert_eq!(slugify("Protocol Buffers"), "protocol_buffers");
        assert_eq!(slugify("C++"), "c");
        assert_eq!(slugify("++"), "unknown");
        assert_eq!(slugify(""), "unknown");
    }

    #[test]
    fn test_rendered_line_counts_round_trip() {
        let map = LanguageMap::default();
        let alloc = allocation(&[("Python", 50), ("Rust", 7), ("Shell", 4)]);
        let files = render_synthetic(&alloc, &map, 61, 42);

        assert_eq!(files.len(), 3);
        for file in &files {
            assert_eq!(
                count_nonblank_str(&file.content),
                file.lines,
                "line count mismatch for {}",
                file.filename
            );
        }
    }

    #[test]
    fn test_filenames_and_markers() {
        let map = LanguageMap::default();
        let alloc = allocation(&[("Python", 10), ("Rust", 10)]);
        let files = render_synthetic(&alloc, &map, 20, 42);

        assert_eq!(files[0].filename, "01_python_language_representation.py");
        assert_eq!(files[1].filename, "02_rust_language_representation.rs");
        assert!(files[0].content.starts_with("# "));
        assert!(files[1].content.starts_with("// "));
    }

    #[test]
    fn test_zero_allocation_skipped_but_keeps_ordinal() {
        let map = LanguageMap::default();
        let alloc = allocation(&[("Go", 0), ("Python", 5)]);
        let files = render_synthetic(&alloc, &map, 5, 42);

        assert_eq!(files.len(), 1);
        // Go consumed ordinal 01 even though it emitted nothing
        assert_eq!(files[0].filename, "02_python_language_representation.py");
    }

    #[test]
    fn test_header_truncated_for_tiny_allocations() {
        let map = LanguageMap::default();
        let files = render_synthetic(&allocation(&[("Python", 2)]), &map, 2, 42);

        assert_eq!(count_nonblank_str(&files[0].content), 2);
        assert!(!files[0].content.contains("filler line"));

        let files = render_synthetic(&allocation(&[("Python", 4)]), &map, 4, 42);
        assert_eq!(count_nonblank_str(&files[0].content), 4);
        assert!(!files[0].content.contains("filler line"));
    }

    #[test]
    fn test_header_mentions_language_and_total() {
        let map = LanguageMap::default();
        let files = render_synthetic(&allocation(&[("Python", 10)]), &map, 2000, 42);

        assert!(files[0].content.contains("Python"));
        assert!(files[0].content.contains("2000"));
    }

    #[test]
    fn test_same_seed_is_byte_identical() {
        let map = LanguageMap::default();
        let alloc = allocation(&[("Python", 30), ("Rust", 20)]);

        let first = render_synthetic(&alloc, &map, 50, 42);
        let second = render_synthetic(&alloc, &map, 50, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let map = LanguageMap::default();
        let alloc = allocation(&[("Python", 30)]);

        let first = render_synthetic(&alloc, &map, 30, 1);
        let second = render_synthetic(&alloc, &map, 30, 2);
        assert_ne!(first[0].content, second[0].content);
    }

    #[test]
    fn test_unknown_language_falls_back_to_txt() {
        let map = LanguageMap::default();
        let files = render_synthetic(&allocation(&[("Fortran", 6)]), &map, 6, 42);

        assert!(files[0].filename.ends_with(".txt"));
        assert!(files[0].content.starts_with("# "));
    }

    #[test]
    fn test_write_synthetic() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("generated");
        let map = LanguageMap::default();
        let files = render_synthetic(&allocation(&[("Python", 8)]), &map, 8, 42);

        let written = write_synthetic(&out, &files).unwrap();
        assert_eq!(written.len(), 1);
        let on_disk = std::fs::read_to_string(&written[0]).unwrap();
        assert_eq!(on_disk, files[0].content);
    }

    #[test]
    fn test_empty_allocation_writes_nothing() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("generated");
        let written = write_synthetic(&out, &[]).unwrap();
        assert!(written.is_empty());
        assert!(out.is_dir());
    }
}
