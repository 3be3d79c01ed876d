//! Static comment-syntax registry.
//!
//! Maps file extensions to the markers used to recognize single-line
//! and block comments, plus a human-readable language name per
//! extension. Behavior varies only by data (the markers), so this is
//! a pair of lookup tables rather than a trait hierarchy.

/// Comment markers for one file extension.
///
/// Either marker set may be absent: some formats have no single-line
/// comment form (HTML), others have no block form (shell, YAML).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntaxRule {
    /// Marker that starts a single-line comment (e.g. `//`, `#`)
    pub single_line: Option<&'static str>,
    /// Marker that opens a block comment (e.g. `/*`)
    pub block_start: Option<&'static str>,
    /// Marker that closes a block comment (e.g. `*/`)
    pub block_end: Option<&'static str>,
}

impl SyntaxRule {
    /// Rule with only a single-line marker.
    pub const fn single(marker: &'static str) -> Self {
        Self {
            single_line: Some(marker),
            block_start: None,
            block_end: None,
        }
    }

    /// Rule with only block markers.
    pub const fn block(start: &'static str, end: &'static str) -> Self {
        Self {
            single_line: None,
            block_start: Some(start),
            block_end: Some(end),
        }
    }

    /// Rule with both a single-line marker and block markers.
    pub const fn full(single: &'static str, start: &'static str, end: &'static str) -> Self {
        Self {
            single_line: Some(single),
            block_start: Some(start),
            block_end: Some(end),
        }
    }
}

/// Look up the comment syntax for a file extension.
///
/// Extensions are matched case-insensitively. Unregistered extensions
/// fall back to a `#` single-line rule, which covers most scripting
/// and config formats; lookup never fails.
pub fn lookup(extension: &str) -> SyntaxRule {
    let ext = extension.to_lowercase();
    match ext.as_str() {
        "js" | "ts" | "jsx" | "tsx" | "java" | "c" | "cpp" | "h" | "cs" | "go" | "rs" | "php"
        | "swift" | "kt" | "scala" | "scss" | "less" | "vue" | "svelte" => {
            SyntaxRule::full("//", "/*", "*/")
        }
        "py" => SyntaxRule::full("#", "\"\"\"", "\"\"\""),
        "rb" => SyntaxRule::full("#", "=begin", "=end"),
        "sql" => SyntaxRule::full("--", "/*", "*/"),
        "sh" | "bash" | "zsh" | "yml" | "yaml" | "toml" => SyntaxRule::single("#"),
        "html" | "xml" => SyntaxRule::block("<!--", "-->"),
        "css" => SyntaxRule::block("/*", "*/"),
        _ => SyntaxRule::single("#"),
    }
}

/// Human-readable language name for a file extension.
///
/// Unregistered extensions return the uppercased extension itself, so
/// every file lands in some language bucket.
pub fn display_name(extension: &str) -> String {
    let ext = extension.to_lowercase();
    let name = match ext.as_str() {
        "js" => "JavaScript",
        "ts" => "TypeScript",
        "jsx" => "JSX",
        "tsx" => "TSX",
        "py" => "Python",
        "rb" => "Ruby",
        "java" => "Java",
        "c" => "C",
        "cpp" => "C++",
        "h" => "C Header",
        "cs" => "C#",
        "go" => "Go",
        "rs" => "Rust",
        "php" => "PHP",
        "swift" => "Swift",
        "kt" => "Kotlin",
        "scala" => "Scala",
        "sh" => "Shell",
        "bash" => "Bash",
        "zsh" => "Zsh",
        "yml" | "yaml" => "YAML",
        "toml" => "TOML",
        "sql" => "SQL",
        "html" => "HTML",
        "xml" => "XML",
        "css" => "CSS",
        "scss" => "SCSS",
        "less" => "LESS",
        "vue" => "Vue",
        "svelte" => "Svelte",
        "json" => "JSON",
        "md" => "Markdown",
        "txt" => "Text",
        _ => return ext.to_uppercase(),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_c_style() {
        let rule = lookup("rs");
        assert_eq!(rule.single_line, Some("//"));
        assert_eq!(rule.block_start, Some("/*"));
        assert_eq!(rule.block_end, Some("*/"));
    }

    #[test]
    fn test_lookup_single_only() {
        let rule = lookup("sh");
        assert_eq!(rule.single_line, Some("#"));
        assert_eq!(rule.block_start, None);
        assert_eq!(rule.block_end, None);
    }

    #[test]
    fn test_lookup_block_only() {
        let rule = lookup("html");
        assert_eq!(rule.single_line, None);
        assert_eq!(rule.block_start, Some("<!--"));
        assert_eq!(rule.block_end, Some("-->"));
    }

    #[test]
    fn test_lookup_python_docstring_markers() {
        let rule = lookup("py");
        assert_eq!(rule.single_line, Some("#"));
        assert_eq!(rule.block_start, Some("\"\"\""));
        assert_eq!(rule.block_end, Some("\"\"\""));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("RS"), lookup("rs"));
        assert_eq!(lookup("Py"), lookup("py"));
    }

    #[test]
    fn test_lookup_unknown_falls_back_to_hash() {
        let rule = lookup("zzz");
        assert_eq!(rule.single_line, Some("#"));
        assert_eq!(rule.block_start, None);
        assert_eq!(rule.block_end, None);
    }

    #[test]
    fn test_display_name_known() {
        assert_eq!(display_name("rs"), "Rust");
        assert_eq!(display_name("js"), "JavaScript");
        assert_eq!(display_name("cpp"), "C++");
        assert_eq!(display_name("yml"), "YAML");
        assert_eq!(display_name("yaml"), "YAML");
    }

    #[test]
    fn test_display_name_case_insensitive() {
        assert_eq!(display_name("RS"), "Rust");
    }

    #[test]
    fn test_display_name_unknown_uppercases() {
        assert_eq!(display_name("zzz"), "ZZZ");
        assert_eq!(display_name("proto"), "PROTO");
    }
}
