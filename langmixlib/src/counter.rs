//! Non-blank line counting.
//!
//! A line counts when it contains at least one non-whitespace character.
//! File contents are decoded lossily, so undecodable bytes degrade into
//! replacement characters instead of aborting the count.

use std::fs;
use std::path::Path;

/// Count lines containing at least one non-whitespace character.
pub fn count_nonblank_str(text: &str) -> u64 {
    text.lines().filter(|line| !line.trim().is_empty()).count() as u64
}

/// Count non-blank lines in a file, forgiving encoding issues.
///
/// Returns an error only when the file cannot be read at all; invalid UTF-8
/// is tolerated via lossy decoding.
pub fn count_nonblank_file(path: impl AsRef<Path>) -> std::io::Result<u64> {
    let bytes = fs::read(path)?;
    Ok(count_nonblank_str(&String::from_utf8_lossy(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_counts_only_nonblank_lines() {
        let text = "fn main() {\n\n    \t  \n    println!(\"hi\");\n}\n";
        assert_eq!(count_nonblank_str(text), 3);
    }

    #[test]
    fn test_whitespace_only_content_is_zero() {
        assert_eq!(count_nonblank_str(""), 0);
        assert_eq!(count_nonblank_str("\n\n\n"), 0);
        assert_eq!(count_nonblank_str("   \n\t\n  \t  "), 0);
    }

    #[test]
    fn test_no_trailing_newline() {
        assert_eq!(count_nonblank_str("one\ntwo"), 2);
    }

    #[test]
    fn test_file_counting() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.py");
        fs::write(&path, "x = 1\n\ny = 2\n").unwrap();
        assert_eq!(count_nonblank_file(&path).unwrap(), 2);
    }

    #[test]
    fn test_invalid_utf8_is_tolerated() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("mixed.txt");
        fs::write(&path, [0xff, 0xfe, b'\n', b'o', b'k']).unwrap();
        // The invalid bytes decode to replacement characters, which are
        // non-whitespace, so both lines count.
        assert_eq!(count_nonblank_file(&path).unwrap(), 2);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(count_nonblank_file("/nonexistent/file.py").is_err());
    }
}
