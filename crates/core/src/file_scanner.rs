//! File scanning utilities
//!
//! Provides file discovery and filtering across an Android project tree.

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File scanner with configurable filters
pub struct FileScanner {
    root: PathBuf,
    extensions: Vec<String>,
    exclude_patterns: Vec<String>,
}

impl FileScanner {
    /// Create a new file scanner rooted at the given path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }

    /// Filter by file extensions (e.g., "lua", "template")
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Add patterns to exclude (glob patterns)
    pub fn exclude(mut self, patterns: &[&str]) -> Self {
        self.exclude_patterns = patterns.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Scan and return matching files
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|e| !self.is_hidden(e.path()))
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            // Check extension filter
            if !self.extensions.is_empty() {
                let ext = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("");
                if !self.extensions.iter().any(|e| e == ext) {
                    continue;
                }
            }

            // Check exclude patterns
            let path_str = path.to_string_lossy();
            if self.should_exclude(&path_str) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        Ok(files)
    }

    fn is_hidden(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with('.') && n != "." && n != "..")
            .unwrap_or(false)
    }

    fn should_exclude(&self, path_str: &str) -> bool {
        for pattern in &self.exclude_patterns {
            // Directory patterns like **/build/** reduce to a segment check
            if let Some(segment) = pattern
                .strip_prefix("**/")
                .and_then(|p| p.strip_suffix("/**"))
            {
                if path_str.contains(&format!("/{}/", segment))
                    || path_str.starts_with(&format!("{}/", segment))
                {
                    return true;
                }
            } else if let Ok(pat) = glob::Pattern::new(pattern) {
                if pat.matches(path_str) {
                    return true;
                }
            }
        }
        false
    }
}

/// Scan for Lua scripts in a directory
pub fn scan_lua_files(root: &Path) -> Result<Vec<PathBuf>> {
    FileScanner::new(root)
        .with_extensions(&["lua"])
        .exclude(&["**/build/**", "**/generated/**"])
        .scan()
}

/// Scan for template files in a directory
pub fn scan_template_files(root: &Path) -> Result<Vec<PathBuf>> {
    FileScanner::new(root)
        .with_extensions(&["template"])
        .exclude(&["**/build/**", "**/generated/**"])
        .scan()
}
