//! Error types for polyloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or running a scan.
///
/// Unreadable or undecodable files are not represented here: the
/// scanner skips them silently. These variants cover fatal
/// configuration problems only.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Invalid glob pattern in a filter
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
