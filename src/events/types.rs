//! Event type definitions for progress reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted by the detector pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Path resolution events
    Scan(ScanEvent),
    /// Hashing phase events
    Hash(HashEvent),
    /// Grouping events
    Group(GroupEvent),
    /// Pipeline-level events
    Pipeline(PipelineEvent),
}

/// Events during path resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScanEvent {
    /// Resolution has started
    Started { roots: Vec<PathBuf> },
    /// A root or entry was rejected; resolution continues
    Rejected { path: PathBuf, message: String },
    /// Resolution completed
    Completed {
        total_candidates: usize,
        /// Whether reports should render full paths instead of file names
        full_path: bool,
    },
}

/// Events during the hashing phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HashEvent {
    /// Hashing has started
    Started { total_files: usize },
    /// A file is about to be hashed
    Progress(HashProgress),
    /// A file could not be fingerprinted; hashing continues
    Error { path: PathBuf, message: String },
    /// Hashing completed
    Completed { total_hashed: usize, failed: usize },
}

/// Progress information during hashing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashProgress {
    /// 1-indexed position of this file
    pub position: usize,
    /// Total number of files to hash
    pub total: usize,
    /// File being hashed
    pub current_path: PathBuf,
}

impl HashProgress {
    /// Floored percentage of the batch reached at this position
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 100;
        }
        self.position * 100 / self.total
    }
}

/// Events from the group index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GroupEvent {
    /// A file joined a group that already had a member
    DuplicateFound { path: PathBuf, group_size: usize },
}

/// Pipeline-level events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PipelineEvent {
    /// Pipeline has started
    Started,
    /// Nothing survived path resolution
    NoFiles,
    /// Pipeline completed
    Completed { summary: RunSummary },
}

/// Summary of a finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Files that were fingerprinted successfully
    pub total_files: usize,
    /// Number of distinct fingerprints
    pub unique_groups: usize,
    /// Number of groups with more than one member
    pub duplicate_groups: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}
