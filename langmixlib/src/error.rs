//! Error types for langmixlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning, apportioning, or emitting
#[derive(Error, Debug)]
pub enum LangmixError {
    /// Scan root is missing or not a directory
    #[error("root path does not exist or is not a directory: {0}")]
    RootNotFound(PathBuf),

    /// Requested synthetic-line total is negative
    #[error("synthetic line total must be non-negative, got {0}")]
    InvalidTotal(i64),

    /// Malformed extension-to-language table entry
    #[error("invalid language map entry: {0}")]
    InvalidLanguageMap(String),

    /// Failed to write a synthetic file
    #[error("failed to write synthetic file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
