//! # langmixlib
//!
//! Per-language line census for a directory tree, plus exact proportional
//! apportionment of a synthetic-line budget across the observed languages.
//!
//! ## Overview
//!
//! The library scans a tree, classifies files by extension, and tallies
//! non-empty lines per language. A fixed budget of synthetic lines can then
//! be split across languages with the largest-remainder (Hamilton) method,
//! so the allocations are non-negative integers that sum *exactly* to the
//! requested total while tracking each language's share of the tree. The
//! emitter turns an allocation into deterministic, diff-stable filler files;
//! the reporter formats the census as a text table or markdown badges.
//!
//! - **Census**: per-language `{lines, files}` over non-empty lines only
//! - **Apportionment**: sum-exact, deterministic, label-ordered tie-breaks
//! - **Emission**: seeded content, byte-identical across runs
//! - **Reporting**: pure projections, no census mutation
//!
//! Classification is name-based only; no file contents are parsed. Scans
//! are single-threaded and run to completion in one pass.
//!
//! ## Example
//!
//! ```rust
//! use langmixlib::{apportion, render_synthetic, scan_tree, LanguageMap, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("main.py"), "print('hi')\n\nprint('bye')\n").unwrap();
//! fs::write(dir.path().join("util.sh"), "echo hi\n").unwrap();
//!
//! let map = LanguageMap::default();
//! let census = scan_tree(dir.path(), &map, &ScanOptions::new()).unwrap();
//! assert_eq!(census.get("Python").unwrap().lines, 2);
//!
//! // 300 synthetic lines, split 2:1 like the census
//! let allocation = apportion(&census, 300).unwrap();
//! assert_eq!(allocation["Python"], 200);
//! assert_eq!(allocation["Shell"], 100);
//! assert_eq!(allocation.values().sum::<u64>(), 300);
//!
//! let files = render_synthetic(&allocation, &map, 300, 42);
//! assert_eq!(files.len(), 2);
//! ```

pub mod census;
pub mod counter;
pub mod emit;
pub mod error;
pub mod languages;
pub mod portion;
pub mod report;
pub mod scan;

pub use census::{Census, LanguageStat};
pub use counter::{count_nonblank_file, count_nonblank_str};
pub use emit::{render_synthetic, slugify, write_synthetic, SyntheticFile, HEADER_LINES};
pub use error::LangmixError;
pub use languages::{comment_marker, LanguageMap};
pub use portion::{apportion, largest_remainder, Allocation};
pub use report::{build_report, render_badges, render_table, ReportRow, BADGE_HEADING};
pub use scan::{scan_tree, ScanOptions, DEFAULT_EXCLUDE_DIRS};

/// Result type for langmixlib operations
pub type Result<T> = std::result::Result<T, LangmixError>;
