//! # Scanner Module
//!
//! Resolves the paths given on the command line into candidate files.
//!
//! Roots may be files or directories. Directories contribute their
//! immediate children, or every descendant when recursion is on. Missing
//! roots and roots with the wrong extension are reported and skipped.
//!
//! ## Example
//! ```rust,ignore
//! use dupe_detect::core::scanner::{PathResolver, ResolveConfig};
//!
//! let resolver = PathResolver::new(ResolveConfig::default());
//! let resolution = resolver.resolve(&["/photos".into()]);
//! ```

mod filter;
mod resolver;

pub use filter::{ExtensionFilter, DEFAULT_EXTENSIONS};
pub use resolver::{PathResolver, ResolveConfig};

use crate::error::ScanError;
use std::path::{Path, PathBuf};

/// How file names are rendered in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathDisplay {
    full_path: bool,
}

impl PathDisplay {
    /// Render full paths
    pub fn full() -> Self {
        Self { full_path: true }
    }

    /// Render bare file names
    pub fn name_only() -> Self {
        Self { full_path: false }
    }

    /// Pick the mode for a run: full paths once there is more than one
    /// root or recursion is on.
    pub fn for_roots(root_count: usize, recursive: bool) -> Self {
        Self {
            full_path: recursive || root_count > 1,
        }
    }

    pub fn is_full_path(&self) -> bool {
        self.full_path
    }

    /// Render a path according to the mode
    pub fn render(&self, path: &Path) -> String {
        if self.full_path {
            return path.display().to_string();
        }
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

/// Result of resolving a set of roots
#[derive(Debug)]
pub struct Resolution {
    /// Candidate files, in traversal order, without duplicates
    pub candidates: Vec<PathBuf>,
    /// Per-path errors (non-fatal)
    pub errors: Vec<ScanError>,
    /// Rendering mode for later reports
    pub display: PathDisplay,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
