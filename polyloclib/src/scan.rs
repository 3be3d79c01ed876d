//! High-level scanning API.
//!
//! This module provides the main entry point for scanning a file tree
//! and producing an aggregated [`Report`].

use std::fs;
use std::path::Path;

use crate::classify::classify;
use crate::error::ScanError;
use crate::filter::{discover_files, FilterConfig};
use crate::stats::{FileRecord, LineStats, Report};
use crate::syntax;
use crate::Result;

/// Options for a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// File filter configuration
    pub filter: FilterConfig,
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }
}

/// Scan a file tree and aggregate per-language statistics.
///
/// Each discovered file is read, classified line by line using the
/// comment syntax registered for its extension, and folded into the
/// report. Files that cannot be decoded as UTF-8 text and files
/// without an extension are skipped silently; that is an expected
/// outcome, not an error. A scan that matches no files produces a
/// report with all-zero totals.
///
/// # Example
///
/// ```rust,ignore
/// use polyloclib::{scan_path, FilterConfig, ScanOptions};
///
/// let filter = FilterConfig::new().ignore_dir("node_modules")?;
/// let report = scan_path(".", &ScanOptions::new().filter(filter))?;
/// println!("{} code lines", report.totals.lines.code);
/// ```
pub fn scan_path(path: impl AsRef<Path>, options: &ScanOptions) -> Result<Report> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScanError::PathNotFound(path.to_path_buf()));
    }

    let base = fs::canonicalize(path)?;
    let files = discover_files(&base, &options.filter)?;

    let mut records = Vec::new();

    for file in files {
        // Binary and otherwise undecodable files are skipped.
        let Ok(content) = fs::read_to_string(&file) else {
            continue;
        };
        let Some(ext) = file.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let ext = ext.to_lowercase();

        let rule = syntax::lookup(&ext);
        let lines = classify(&content, &rule);

        let rel = file
            .strip_prefix(&base)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| file.clone());
        records.push(FileRecord::new(rel, ext, lines));
    }

    Ok(Report::from_records(records, base))
}

/// Classify a single file.
///
/// Unlike [`scan_path`], read failures are reported to the caller
/// since the file was named explicitly. A file without an extension
/// is classified with the fallback `#` rule.
pub fn classify_file(path: impl AsRef<Path>) -> Result<LineStats> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(ScanError::Io)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    Ok(classify(&content, &syntax::lookup(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::LanguageBucket;
    use std::fs;
    use tempfile::tempdir;

    fn create_project(root: &Path) {
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("node_modules")).unwrap();

        fs::write(
            root.join("src/main.rs"),
            "// entry point\nfn main() {\n    println!(\"hi\");\n}\n",
        )
        .unwrap();
        fs::write(root.join("src/util.py"), "# TODO: refactor\nx = 1\n").unwrap();
        fs::write(root.join("node_modules/dep.js"), "module.exports = 1;\n").unwrap();
    }

    #[test]
    fn test_scan_path_aggregates() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let filter = FilterConfig::new().ignore_dir("node_modules").unwrap();
        let report = scan_path(temp.path(), &ScanOptions::new().filter(filter)).unwrap();

        assert_eq!(report.totals.files, 2);
        assert!(report.by_language.contains_key("Rust"));
        assert!(report.by_language.contains_key("Python"));
        assert!(!report.by_language.contains_key("JavaScript"));
        assert_eq!(report.totals.lines.todos, 1);
    }

    #[test]
    fn test_scan_records_relative_paths() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let report = scan_path(temp.path(), &ScanOptions::new()).unwrap();

        for record in &report.files {
            assert!(record.path.is_relative());
        }
        assert!(report.files.iter().any(|r| r.path.ends_with("src/main.rs")));
    }

    #[test]
    fn test_scan_skips_undecodable_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("ok.rs"), "fn main() {}\n").unwrap();
        fs::write(temp.path().join("bad.bin"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let report = scan_path(temp.path(), &ScanOptions::new()).unwrap();

        assert_eq!(report.totals.files, 1);
        assert_eq!(report.files[0].extension, "rs");
    }

    #[test]
    fn test_scan_skips_extensionless_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("Makefile"), "all:\n\techo hi\n").unwrap();
        fs::write(temp.path().join("script.sh"), "# comment\necho hi\n").unwrap();

        let report = scan_path(temp.path(), &ScanOptions::new()).unwrap();

        assert_eq!(report.totals.files, 1);
        assert!(report.by_language.contains_key("Shell"));
    }

    #[test]
    fn test_scan_unknown_extension_uses_fallback() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("data.zzz"), "# comment\nvalue\n").unwrap();

        let report = scan_path(temp.path(), &ScanOptions::new()).unwrap();

        let bucket = &report.by_language["ZZZ"];
        assert_eq!(bucket.files, 1);
        assert_eq!(bucket.lines.comments, 1);
        assert_eq!(bucket.lines.code, 1);
    }

    #[test]
    fn test_scan_empty_dir_is_all_zero() {
        let temp = tempdir().unwrap();

        let report = scan_path(temp.path(), &ScanOptions::new()).unwrap();

        assert_eq!(report.totals, LanguageBucket::new());
        assert!(report.files.is_empty());
    }

    #[test]
    fn test_scan_missing_path_is_error() {
        let result = scan_path("/nonexistent/path", &ScanOptions::new());
        assert!(matches!(result, Err(ScanError::PathNotFound(_))));
    }

    #[test]
    fn test_scan_report_invariants() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let report = scan_path(temp.path(), &ScanOptions::new()).unwrap();

        let bucket_sum = report
            .by_language
            .values()
            .fold(LanguageBucket::new(), |acc, b| acc + *b);
        assert_eq!(bucket_sum, report.totals);

        for record in &report.files {
            let l = record.lines;
            assert_eq!(l.total, l.code + l.comments + l.blanks);
        }
    }

    #[test]
    fn test_classify_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("lib.rs");
        fs::write(&file, "// comment\nfn f() {}\n").unwrap();

        let stats = classify_file(&file).unwrap();

        assert_eq!(stats.comments, 1);
        assert_eq!(stats.code, 1);
    }

    #[test]
    fn test_classify_file_missing_is_error() {
        let result = classify_file("/nonexistent/file.rs");
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_total_lines_counts_segments() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.rs"), "x\ny\n").unwrap();

        let report = scan_path(temp.path(), &ScanOptions::new()).unwrap();

        // Two code segments plus the empty one after the final newline.
        assert_eq!(report.totals.lines.total, 3);
        assert_eq!(report.totals.lines.code, 2);
        assert_eq!(report.totals.lines.blanks, 1);
    }
}
