//! Root expansion using walkdir.

use super::{filter::ExtensionFilter, PathDisplay, Resolution};
use crate::error::ScanError;
use crate::events::{null_sender, Event, EventSender, ScanEvent};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Configuration for path resolution
#[derive(Debug, Clone, Default)]
pub struct ResolveConfig {
    /// Descend into subdirectories of directory roots
    pub recursive: bool,
    /// Custom extensions to accept (None = bmp, png, jpg)
    pub extensions: Option<Vec<String>>,
}

/// Expands roots into a flat, filtered, de-duplicated list of files
pub struct PathResolver {
    config: ResolveConfig,
    filter: ExtensionFilter,
}

impl PathResolver {
    /// Create a new resolver with the given configuration
    pub fn new(config: ResolveConfig) -> Self {
        let filter = match config.extensions {
            Some(ref extensions) => ExtensionFilter::with_extensions(extensions),
            None => ExtensionFilter::new(),
        };

        Self { config, filter }
    }

    /// Resolve roots without events
    pub fn resolve(&self, roots: &[PathBuf]) -> Resolution {
        self.resolve_with_events(roots, &null_sender())
    }

    /// Resolve roots, reporting each rejected path as an event
    pub fn resolve_with_events(&self, roots: &[PathBuf], events: &EventSender) -> Resolution {
        events.send(Event::Scan(ScanEvent::Started {
            roots: roots.to_vec(),
        }));

        let mut candidates = Vec::new();
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for root in roots {
            let mut found = Vec::new();
            if let Err(e) = self.expand_root(root, &mut found, &mut errors) {
                errors.push(e);
            }

            for path in found {
                let key = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
                if seen.insert(key) {
                    candidates.push(path);
                } else {
                    debug!(path = %path.display(), "skipping repeated candidate");
                }
            }
        }

        for error in &errors {
            warn!(path = %error.path().display(), "{}", error);
            events.send(Event::Scan(ScanEvent::Rejected {
                path: error.path().clone(),
                message: error.to_string(),
            }));
        }

        let display = PathDisplay::for_roots(roots.len(), self.config.recursive);

        events.send(Event::Scan(ScanEvent::Completed {
            total_candidates: candidates.len(),
            full_path: display.is_full_path(),
        }));

        Resolution {
            candidates,
            errors,
            display,
        }
    }

    /// Expand a single root into `found`.
    ///
    /// Errors on entries inside a directory are collected in `errors`; an
    /// error about the root itself is returned.
    fn expand_root(
        &self,
        root: &Path,
        found: &mut Vec<PathBuf>,
        errors: &mut Vec<ScanError>,
    ) -> Result<(), ScanError> {
        if !root.exists() {
            return Err(ScanError::NotFound {
                path: root.to_path_buf(),
            });
        }

        if !root.is_dir() {
            if !self.filter.should_include(root) {
                return Err(ScanError::InvalidExtension {
                    path: root.to_path_buf(),
                });
            }
            if !root.is_file() {
                return Err(ScanError::NotRegularFile {
                    path: root.to_path_buf(),
                });
            }
            found.push(root.to_path_buf());
            return Ok(());
        }

        let max_depth = if self.config.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name();

        for entry_result in walker {
            match entry_result {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && self.filter.should_include(path) {
                        found.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.to_path_buf())
                        .unwrap_or_else(|| root.to_path_buf());
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                    errors.push(ScanError::ReadDirectory { path, source });
                }
            }
        }

        debug!(root = %root.display(), files = found.len(), "expanded directory root");
        Ok(())
    }
}
