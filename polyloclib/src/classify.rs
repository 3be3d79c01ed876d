//! Per-file line classification.
//!
//! A single forward pass over the file's lines, O(lines), carrying one
//! bit of state: whether we are inside a block comment. This is a
//! line-oriented heuristic, not a lexer; comment markers embedded in
//! string literals are deliberately not recognized.

use crate::stats::LineStats;
use crate::syntax::SyntaxRule;

/// Classify every line of `content` as code, comment, or blank, and
/// tag lines containing TODO/FIXME keywords.
///
/// Lines are the `'\n'`-delimited segments of `content`; an empty file
/// is one empty segment, counted as one blank line. The returned stats
/// satisfy `total == code + comments + blanks`.
pub fn classify(content: &str, rule: &SyntaxRule) -> LineStats {
    let mut stats = LineStats::new();
    let mut inside_block_comment = false;

    for line in content.split('\n') {
        stats.total += 1;

        // Keyword tags are case-insensitive, at most once per line,
        // and independent of the code/comment/blank classification.
        let upper = line.to_uppercase();
        if upper.contains("TODO") {
            stats.todos += 1;
        }
        if upper.contains("FIXME") {
            stats.fixmes += 1;
        }

        let trimmed = line.trim();

        // Blank takes priority, even inside an open block comment.
        if trimmed.is_empty() {
            stats.blanks += 1;
            continue;
        }

        if let (Some(start), Some(end)) = (rule.block_start, rule.block_end) {
            if inside_block_comment {
                stats.comments += 1;
                if trimmed.contains(end) {
                    inside_block_comment = false;
                }
                continue;
            }

            if trimmed.starts_with(start) {
                stats.comments += 1;
                // The block stays open unless the line also contains the
                // end marker and does not itself end with the start
                // marker. Nesting is not supported; keep this rule as-is.
                if !trimmed.contains(end) || trimmed.ends_with(start) {
                    inside_block_comment = true;
                }
                continue;
            }
        }

        if let Some(single) = rule.single_line {
            if trimmed.starts_with(single) {
                stats.comments += 1;
                continue;
            }
        }

        stats.code += 1;
    }

    stats
}
