//! # Comparator Module
//!
//! Groups files by fingerprint.
//!
//! Unlike a distance-based comparison there are no thresholds: two files
//! belong together exactly when their fingerprints are equal, which makes
//! grouping an equivalence relation by construction.

mod index;

pub use index::GroupIndex;

use crate::core::hasher::Fingerprint;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Files sharing one fingerprint, in the order they were recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// The shared fingerprint
    pub fingerprint: Fingerprint,
    /// Members in insertion order
    pub files: Vec<PathBuf>,
}

impl Group {
    fn new(fingerprint: Fingerprint, first: PathBuf) -> Self {
        Self {
            fingerprint,
            files: vec![first],
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// A group with more than one member
    pub fn is_duplicate(&self) -> bool {
        self.files.len() > 1
    }
}
