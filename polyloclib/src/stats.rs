//! Core data structures for scan statistics.
//!
//! Folding is field-wise addition everywhere, so aggregation is
//! commutative and associative: any permutation of the same file
//! records produces an identical [`Report`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

use crate::syntax;

/// Line classification counts for one file (or a sum of files).
///
/// Invariant: `total == code + comments + blanks`. The TODO/FIXME
/// counters are informational tags layered on top of that partition;
/// a single line can be both a comment line and a TODO line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    /// Total lines (newline-delimited segments)
    pub total: u64,
    /// Lines classified as code
    pub code: u64,
    /// Lines classified as comments
    pub comments: u64,
    /// Whitespace-only lines
    pub blanks: u64,
    /// Lines containing "TODO" (case-insensitive)
    pub todos: u64,
    /// Lines containing "FIXME" (case-insensitive)
    pub fixmes: u64,
}

impl LineStats {
    /// Create a new LineStats with all zeros.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Add for LineStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            code: self.code + other.code,
            comments: self.comments + other.comments,
            blanks: self.blanks + other.blanks,
            todos: self.todos + other.todos,
            fixmes: self.fixmes + other.fixmes,
        }
    }
}

impl AddAssign for LineStats {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Statistics for a single successfully read file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the scan base
    pub path: PathBuf,
    /// Lowercased file extension
    pub extension: String,
    /// Line classification counts
    #[serde(flatten)]
    pub lines: LineStats,
}

impl FileRecord {
    /// Create a new file record.
    pub fn new(path: PathBuf, extension: String, lines: LineStats) -> Self {
        Self {
            path,
            extension,
            lines,
        }
    }
}

/// Running sum of line stats plus a file count.
///
/// Buckets only ever grow; records are folded in one at a time and
/// never removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageBucket {
    /// Number of files folded into this bucket
    pub files: u64,
    /// Summed line counts
    #[serde(flatten)]
    pub lines: LineStats,
}

impl LanguageBucket {
    /// Create a new empty bucket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file record into this bucket.
    pub fn add_record(&mut self, record: &FileRecord) {
        self.files += 1;
        self.lines += record.lines;
    }
}

impl Add for LanguageBucket {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            files: self.files + other.files,
            lines: self.lines + other.lines,
        }
    }
}

impl AddAssign for LanguageBucket {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Aggregated result of one scan.
///
/// Built once per invocation and read-only afterwards; renderers
/// derive views (ratios, sort orders) without mutating it. Invariant:
/// `totals` equals the field-wise sum of all `by_language` buckets,
/// which equals the field-wise sum over `files`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Per-language buckets, keyed by display name
    pub by_language: BTreeMap<String, LanguageBucket>,
    /// Grand total across all files
    pub totals: LanguageBucket,
    /// Per-file records, in scan order
    pub files: Vec<FileRecord>,
    /// Base path the scan was rooted at
    pub base_path: PathBuf,
}

impl Report {
    /// Build a report by folding file records into language buckets
    /// and a grand total.
    ///
    /// Records are grouped by the registry's display name for their
    /// extension; the fold is order-independent.
    pub fn from_records(records: Vec<FileRecord>, base_path: PathBuf) -> Self {
        let mut by_language: BTreeMap<String, LanguageBucket> = BTreeMap::new();
        let mut totals = LanguageBucket::new();

        for record in &records {
            let name = syntax::display_name(&record.extension);
            by_language.entry(name).or_default().add_record(record);
            totals.add_record(record);
        }

        Self {
            by_language,
            totals,
            files: records,
            base_path,
        }
    }
}
