//! File filtering and discovery.
//!
//! Walks a directory tree and yields the files a scan should visit,
//! after applying directory ignore patterns and an optional extension
//! allowlist.

use std::path::{Component, Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::Result;

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Patterns matched against individual path components; a file
    /// under a matching directory is skipped
    pub ignore: Vec<Pattern>,
    /// Lowercased extension allowlist (empty = all extensions)
    pub extensions: Vec<String>,
}

impl FilterConfig {
    /// Create a new empty filter config (all files with an extension).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory name pattern to ignore (e.g. `node_modules`,
    /// `*.egg-info`).
    pub fn ignore_dir(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| ScanError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.ignore.push(pat);
        Ok(self)
    }

    /// Add multiple directory ignore patterns.
    pub fn ignore_dirs<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self = self.ignore_dir(pattern.as_ref())?;
        }
        Ok(self)
    }

    /// Restrict the scan to the given extensions (case-insensitive).
    pub fn extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = exts
            .into_iter()
            .map(|e| e.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Check whether a directory name matches an ignore pattern.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignore.iter().any(|p| p.matches(name))
    }

    /// Check if a file path passes the filter.
    ///
    /// A path matches if it has an extension, the extension is in the
    /// allowlist (or the allowlist is empty), and no path component
    /// matches an ignore pattern.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };

        if !self.extensions.is_empty() {
            let ext = ext.to_lowercase();
            if !self.extensions.contains(&ext) {
                return false;
            }
        }

        !path.components().any(|c| match c {
            Component::Normal(name) => name
                .to_str()
                .is_some_and(|name| self.is_ignored_dir(name)),
            _ => false,
        })
    }
}

/// Discover files under a root directory.
///
/// Walks the tree, prunes ignored directories, and returns all files
/// matching the filter, sorted for deterministic output. Walk errors
/// on individual entries are skipped, not fatal.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(ScanError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    if root.is_file() {
        if filter.matches(root) {
            files.push(root.to_path_buf());
        }
        return Ok(files);
    }

    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        if e.depth() == 0 {
            return true;
        }
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !filter.is_ignored_dir(name);
        }
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();

        if path.is_file() && filter.matches(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();

    Ok(files)
}
