//! # polyloclib
//!
//! A multi-language lines-of-code counter library that classifies each
//! line of a source tree as code, comment, or blank, and tags lines
//! containing TODO/FIXME keywords.
//!
//! ## Overview
//!
//! The classifier is a deliberate line-oriented heuristic, not a
//! lexer: it dispatches on the comment syntax registered for each file
//! extension and carries a single bit of state (whether a block
//! comment is open) across lines. Results are folded into per-language
//! buckets and a grand total, with per-file detail preserved for
//! reporting.
//!
//! ## Features
//!
//! - **Extension-based syntax registry**: single-line and block comment
//!   markers for 30+ extensions, with a `#` fallback for the rest
//! - **TODO/FIXME tagging**: case-insensitive, once per line, layered
//!   on top of the code/comment/blank classification
//! - **Glob filtering**: skip directories and restrict extensions
//! - **Pure data results**: the [`Report`] is a serde-serializable
//!   value with no I/O attached
//!
//! ## Example
//!
//! ```rust
//! use polyloclib::{scan_path, FilterConfig, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(
//!     dir.path().join("lib.rs"),
//!     "// a comment\nfn hello() {}\n",
//! ).unwrap();
//!
//! let options = ScanOptions::new()
//!     .filter(FilterConfig::new().ignore_dir("node_modules").unwrap());
//! let report = scan_path(dir.path(), &options).unwrap();
//!
//! assert_eq!(report.totals.files, 1);
//! assert_eq!(report.totals.lines.code, 1);
//! assert_eq!(report.totals.lines.comments, 1);
//! assert_eq!(report.by_language["Rust"].files, 1);
//! ```

pub mod classify;
pub mod error;
pub mod filter;
pub mod scan;
pub mod stats;
pub mod syntax;

pub use classify::classify;
pub use error::ScanError;
pub use filter::{discover_files, FilterConfig};
pub use scan::{classify_file, scan_path, ScanOptions};
pub use stats::{FileRecord, LanguageBucket, LineStats, Report};
pub use syntax::{display_name, lookup, SyntaxRule};

/// Result type for polyloclib operations
pub type Result<T> = std::result::Result<T, ScanError>;
