//! Extension filtering for candidate files.

use std::collections::HashSet;
use std::path::Path;

/// Extensions accepted when none are configured
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["bmp", "png", "jpg"];

/// Decides whether a path has one of the valid image extensions
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    /// Lowercase extensions without the leading dot
    extensions: HashSet<String>,
}

impl ExtensionFilter {
    /// Create a filter with the default extensions
    pub fn new() -> Self {
        Self::with_extensions(DEFAULT_EXTENSIONS)
    }

    /// Create a filter for the given extensions (`".png"` and `"png"` are equivalent)
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| normalize(ext.as_ref()))
                .filter(|ext| !ext.is_empty())
                .collect(),
        }
    }

    /// Check if a path carries a valid extension
    pub fn should_include(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}
