//! Pipeline execution implementation.

use crate::core::comparator::GroupIndex;
use crate::core::hasher::{Fingerprint, HashStrategy};
use crate::core::scanner::{PathDisplay, PathResolver, ResolveConfig};
use crate::error::{DetectorError, HashError};
use crate::events::{
    null_sender, Event, EventSender, GroupEvent, HashEvent, HashProgress, PipelineEvent,
    RunSummary,
};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of a detection run
#[derive(Debug)]
pub struct DetectionResult {
    /// Every successfully fingerprinted file, grouped
    pub index: GroupIndex,
    /// Files that survived path resolution
    pub total_candidates: usize,
    /// Non-fatal errors, rendered as messages
    pub errors: Vec<String>,
    /// Rendering mode decided during resolution
    pub display: PathDisplay,
    /// Strategy used for this run
    pub strategy: HashStrategy,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl DetectionResult {
    /// True when resolution produced nothing and no hashing happened
    pub fn had_no_files(&self) -> bool {
        self.total_candidates == 0
    }
}

/// Immutable configuration for one run
#[derive(Debug, Clone, Default)]
pub struct DetectorConfig {
    /// Files and/or directories to examine
    pub paths: Vec<PathBuf>,
    /// Fingerprinting strategy
    pub strategy: HashStrategy,
    /// Resolver configuration
    pub resolve: ResolveConfig,
    /// Hashing workers (None = sequential, Some(0) = rayon default)
    pub threads: Option<usize>,
}

/// Builder for detector configuration
#[derive(Default)]
pub struct DetectorBuilder {
    config: DetectorConfig,
}

impl DetectorBuilder {
    /// Create a new detector builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Roots to examine
    pub fn paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.config.paths = paths;
        self
    }

    /// Set the hash strategy
    pub fn strategy(mut self, strategy: HashStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Descend into subdirectories
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.config.resolve.recursive = recursive;
        self
    }

    /// Replace the default `bmp`/`png`/`jpg` extension set
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.config.resolve.extensions = Some(extensions);
        self
    }

    /// Hash on a rayon pool with this many workers
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.threads = threads;
        self
    }

    /// Build the detector
    pub fn build(self) -> Detector {
        Detector {
            config: self.config,
        }
    }
}

/// The duplicate detection pipeline
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    /// Create a new detector builder
    pub fn builder() -> DetectorBuilder {
        DetectorBuilder::new()
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Run the detector without events
    pub fn run(&self) -> Result<DetectionResult, DetectorError> {
        self.run_with_events(&null_sender())
    }

    /// Run the detector with event reporting
    pub fn run_with_events(&self, events: &EventSender) -> Result<DetectionResult, DetectorError> {
        let start_time = Instant::now();
        let strategy = self.config.strategy;

        events.send(Event::Pipeline(PipelineEvent::Started));
        info!(strategy = %strategy, roots = self.config.paths.len(), "starting detection");

        // Phase 1: Resolving
        let resolver = PathResolver::new(self.config.resolve.clone());
        let resolution = resolver.resolve_with_events(&self.config.paths, events);

        let mut errors: Vec<String> = resolution.errors.iter().map(|e| e.to_string()).collect();
        let candidates = resolution.candidates;
        let total = candidates.len();

        if candidates.is_empty() {
            info!("no files to process");
            events.send(Event::Pipeline(PipelineEvent::NoFiles));

            return Ok(DetectionResult {
                index: GroupIndex::new(),
                total_candidates: 0,
                errors,
                display: resolution.display,
                strategy,
                duration_ms: start_time.elapsed().as_millis() as u64,
            });
        }

        // Phase 2: Hashing
        events.send(Event::Hash(HashEvent::Started { total_files: total }));

        let mut index = GroupIndex::new();
        let mut failed = 0;

        let mut record = |path: PathBuf, outcome: Result<Fingerprint, HashError>| match outcome {
            Ok(fingerprint) => {
                debug!(path = %path.display(), %fingerprint, "hashed");
                if index.record(fingerprint, path.clone()) {
                    let group_size = index.get(&fingerprint).map(|g| g.len()).unwrap_or(0);
                    events.send(Event::Group(GroupEvent::DuplicateFound { path, group_size }));
                }
            }
            Err(e) => {
                warn!(path = %path.display(), "{}", e);
                events.send(Event::Hash(HashEvent::Error {
                    path,
                    message: e.to_string(),
                }));
                errors.push(e.to_string());
                failed += 1;
            }
        };

        match self.config.threads {
            None => {
                for (i, path) in candidates.into_iter().enumerate() {
                    events.send(Event::Hash(HashEvent::Progress(HashProgress {
                        position: i + 1,
                        total,
                        current_path: path.clone(),
                    })));
                    let outcome = strategy.fingerprint(&path);
                    record(path, outcome);
                }
            }
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| DetectorError::Config(format!("thread pool: {}", e)))?;

                let completed = AtomicUsize::new(0);
                let outcomes: Vec<Result<Fingerprint, HashError>> = pool.install(|| {
                    candidates
                        .par_iter()
                        .map(|path| {
                            let position = completed.fetch_add(1, Ordering::SeqCst) + 1;
                            events.send(Event::Hash(HashEvent::Progress(HashProgress {
                                position,
                                total,
                                current_path: path.clone(),
                            })));
                            strategy.fingerprint(path)
                        })
                        .collect()
                });

                // Single writer, resolver order
                for (path, outcome) in candidates.into_iter().zip(outcomes) {
                    record(path, outcome);
                }
            }
        }

        events.send(Event::Hash(HashEvent::Completed {
            total_hashed: total - failed,
            failed,
        }));

        let duration_ms = start_time.elapsed().as_millis() as u64;
        let summary = RunSummary {
            total_files: index.total_files(),
            unique_groups: index.len(),
            duplicate_groups: index.duplicate_groups().count(),
            duration_ms,
        };
        info!(
            unique = summary.unique_groups,
            duplicates = summary.duplicate_groups,
            failed,
            "detection finished"
        );
        events.send(Event::Pipeline(PipelineEvent::Completed { summary }));

        Ok(DetectionResult {
            index,
            total_candidates: total,
            errors,
            display: resolution.display,
            strategy,
            duration_ms,
        })
    }
}
