//! Terminal rendering for scan reports.

use console::Style;
use polyloclib::{LanguageBucket, LineStats, Report};

const BANNER_WIDTH: usize = 79;
const TABLE_WIDTH: usize = 73;

/// Styles used by the renderer. With color disabled every style is a
/// no-op and the output is plain deterministic text.
struct Palette {
    frame: Style,
    heading: Style,
    label: Style,
    files: Style,
    code: Style,
    comments: Style,
    todos: Style,
    fixmes: Style,
}

impl Palette {
    fn new(color: bool) -> Self {
        if color {
            Self {
                frame: Style::new().cyan(),
                heading: Style::new().bold(),
                label: Style::new().color256(244),
                files: Style::new().green(),
                code: Style::new().cyan(),
                comments: Style::new().blue(),
                todos: Style::new().yellow(),
                fixmes: Style::new().magenta(),
            }
        } else {
            Self {
                frame: Style::new(),
                heading: Style::new(),
                label: Style::new(),
                files: Style::new(),
                code: Style::new(),
                comments: Style::new(),
                todos: Style::new(),
                fixmes: Style::new(),
            }
        }
    }
}

/// Format a count with thousands separators.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format `part` as a percentage of `total` with one decimal place.
pub fn percent(part: u64, total: u64) -> String {
    if total > 0 {
        format!("{:.1}%", part as f64 / total as f64 * 100.0)
    } else {
        "0.0%".to_string()
    }
}

/// Language buckets sorted by descending code-line count, ties broken
/// by name for a stable order.
pub fn languages_by_code(report: &Report) -> Vec<(&String, &LanguageBucket)> {
    let mut langs: Vec<_> = report.by_language.iter().collect();
    langs.sort_by(|a, b| b.1.lines.code.cmp(&a.1.lines.code).then(a.0.cmp(b.0)));
    langs
}

fn table_row(name: &str, files: u64, bucket_lines: &LineStats) -> String {
    format!(
        "  {:<15} {:>8} {:>10} {:>10} {:>10} {:>10}",
        name,
        format_number(files),
        format_number(bucket_lines.code),
        format_number(bucket_lines.comments),
        format_number(bucket_lines.blanks),
        format_number(bucket_lines.total),
    )
}

/// Render a report as a human-readable summary with a per-language
/// table sorted by descending code lines and a final total row.
pub fn render_report(report: &Report, color: bool) -> String {
    let p = Palette::new(color);
    let totals = &report.totals;
    let mut lines: Vec<String> = Vec::new();

    let banner = "\u{2550}".repeat(BANNER_WIDTH);
    lines.push(String::new());
    lines.push(p.frame.apply_to(&banner).to_string());
    lines.push(
        p.heading
            .apply_to(format!("{:^w$}", "LINES OF CODE REPORT", w = BANNER_WIDTH))
            .to_string(),
    );
    lines.push(p.frame.apply_to(&banner).to_string());
    lines.push(String::new());

    lines.push(p.heading.apply_to("  SUMMARY").to_string());
    lines.push(p.label.apply_to("  \u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}").to_string());

    let summary = [
        ("Total Files:", format_number(totals.files), &p.files),
        ("Total Lines:", format_number(totals.lines.total), &p.files),
        ("Code Lines:", format_number(totals.lines.code), &p.code),
        ("Comments:", format_number(totals.lines.comments), &p.comments),
        ("Blank Lines:", format_number(totals.lines.blanks), &p.label),
        ("TODOs:", format_number(totals.lines.todos), &p.todos),
        ("FIXMEs:", format_number(totals.lines.fixmes), &p.fixmes),
    ];
    for (label, value, style) in summary {
        lines.push(format!(
            "  {} {}",
            p.label.apply_to(format!("{label:<15}")),
            style.apply_to(value),
        ));
    }
    lines.push(String::new());

    lines.push(format!(
        "  {} {}",
        p.label.apply_to(format!("{:<15}", "Code Ratio:")),
        p.code.apply_to(percent(totals.lines.code, totals.lines.total)),
    ));
    lines.push(format!(
        "  {} {}",
        p.label.apply_to(format!("{:<15}", "Comment Ratio:")),
        p.comments.apply_to(percent(totals.lines.comments, totals.lines.total)),
    ));
    lines.push(String::new());

    lines.push(p.heading.apply_to("  BY LANGUAGE").to_string());
    lines.push(
        p.label
            .apply_to("  \u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}")
            .to_string(),
    );

    let header = format!(
        "  {:<15} {:>8} {:>10} {:>10} {:>10} {:>10}",
        "Language", "Files", "Code", "Comments", "Blanks", "Total"
    );
    lines.push(p.label.apply_to(header).to_string());

    let separator = format!("  {}", "\u{2500}".repeat(TABLE_WIDTH));
    lines.push(p.label.apply_to(&separator).to_string());

    for (name, bucket) in languages_by_code(report) {
        lines.push(table_row(name, bucket.files, &bucket.lines));
    }

    lines.push(p.label.apply_to(&separator).to_string());
    lines.push(format!(
        "  {} {:>8} {:>10} {:>10} {:>10} {:>10}",
        p.heading.apply_to(format!("{:<15}", "TOTAL")),
        format_number(totals.files),
        format_number(totals.lines.code),
        format_number(totals.lines.comments),
        format_number(totals.lines.blanks),
        format_number(totals.lines.total),
    ));
    lines.push(String::new());
    lines.push(p.frame.apply_to(&banner).to_string());
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyloclib::{FileRecord, LineStats};
    use std::path::PathBuf;

    fn sample_report() -> Report {
        let records = vec![
            FileRecord::new(
                PathBuf::from("src/main.rs"),
                "rs".to_string(),
                LineStats {
                    total: 1200,
                    code: 1000,
                    comments: 150,
                    blanks: 50,
                    todos: 3,
                    fixmes: 1,
                },
            ),
            FileRecord::new(
                PathBuf::from("app.py"),
                "py".to_string(),
                LineStats {
                    total: 30,
                    code: 20,
                    comments: 5,
                    blanks: 5,
                    todos: 0,
                    fixmes: 0,
                },
            ),
        ];
        Report::from_records(records, PathBuf::from("/tmp/project"))
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 3), "33.3%");
        assert_eq!(percent(0, 0), "0.0%");
        assert_eq!(percent(5, 5), "100.0%");
    }

    #[test]
    fn test_languages_sorted_by_code_desc() {
        let report = sample_report();
        let langs = languages_by_code(&report);
        assert_eq!(langs[0].0, "Rust");
        assert_eq!(langs[1].0, "Python");
    }

    #[test]
    fn test_render_no_color_contents() {
        let report = sample_report();
        let out = render_report(&report, false);

        assert!(out.contains("LINES OF CODE REPORT"));
        assert!(out.contains("SUMMARY"));
        assert!(out.contains("Total Files:"));
        assert!(out.contains("BY LANGUAGE"));
        assert!(out.contains("Rust"));
        assert!(out.contains("Python"));
        assert!(out.contains("TOTAL"));
        // Thousands separator from the Rust bucket
        assert!(out.contains("1,000"));
        // No ANSI escapes with color disabled
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_render_empty_report() {
        let report = Report::from_records(Vec::new(), PathBuf::from("/tmp"));
        let out = render_report(&report, false);

        assert!(out.contains("Total Files:"));
        assert!(out.contains("0.0%"));
        assert!(out.contains("TOTAL"));
    }
}
