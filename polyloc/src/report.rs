//! Plain-text report file writer.

use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use polyloclib::Report;

use crate::render::{languages_by_code, percent};

/// Maximum number of per-file rows in the FILE DETAILS section.
const MAX_FILE_ROWS: usize = 50;

/// Format a report as plain text with the given timestamp.
///
/// Split out from [`write_report`] so the content is testable without
/// touching the clock or the filesystem.
pub fn format_report(report: &Report, timestamp: &str) -> String {
    let totals = &report.totals;
    let mut lines: Vec<String> = Vec::new();

    lines.push("LINES OF CODE REPORT".to_string());
    lines.push("====================".to_string());
    lines.push(format!("Generated: {timestamp}"));
    lines.push(format!("Path: {}", report.base_path.display()));
    lines.push(String::new());

    lines.push("SUMMARY".to_string());
    lines.push("-------".to_string());
    lines.push(format!("Total Files:    {}", totals.files));
    lines.push(format!("Total Lines:    {}", totals.lines.total));
    lines.push(format!("Code Lines:     {}", totals.lines.code));
    lines.push(format!("Comments:       {}", totals.lines.comments));
    lines.push(format!("Blank Lines:    {}", totals.lines.blanks));
    lines.push(format!("TODOs:          {}", totals.lines.todos));
    lines.push(format!("FIXMEs:         {}", totals.lines.fixmes));
    lines.push(String::new());

    lines.push(format!(
        "Code Ratio:     {}",
        percent(totals.lines.code, totals.lines.total)
    ));
    lines.push(format!(
        "Comment Ratio:  {}",
        percent(totals.lines.comments, totals.lines.total)
    ));
    lines.push(String::new());

    lines.push("BY LANGUAGE".to_string());
    lines.push("-----------".to_string());
    for (name, bucket) in languages_by_code(report) {
        lines.push(format!(
            "{}: {} files, {} code, {} comments, {} blanks",
            name, bucket.files, bucket.lines.code, bucket.lines.comments, bucket.lines.blanks
        ));
    }
    lines.push(String::new());

    lines.push("FILE DETAILS".to_string());
    lines.push("------------".to_string());

    let mut records: Vec<_> = report.files.iter().collect();
    records.sort_by(|a, b| b.lines.code.cmp(&a.lines.code));

    for record in records.iter().take(MAX_FILE_ROWS) {
        lines.push(format!(
            "{}: {} code, {} comments, {} blanks",
            record.path.display(),
            record.lines.code,
            record.lines.comments,
            record.lines.blanks
        ));
    }
    if records.len() > MAX_FILE_ROWS {
        lines.push(format!(
            "... and {} more files",
            records.len() - MAX_FILE_ROWS
        ));
    }

    lines.join("\n")
}

/// Write a plain-text report, timestamped with the current UTC time.
pub fn write_report(path: &Path, report: &Report) -> anyhow::Result<()> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    fs::write(path, format_report(report, &timestamp))?;
    Ok(())
}
