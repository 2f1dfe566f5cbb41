//! # Pipeline Module
//!
//! Orchestrates a detection run.
//!
//! ## Pipeline Stages
//! 1. **Resolve** - Expand roots into candidate files
//! 2. **Hash** - Fingerprint each candidate with the selected strategy
//! 3. **Group** - Record fingerprints in the group index, announcing
//!    duplicates as they appear
//!
//! ## Parallelism
//! Sequential by default. With a worker count set, fingerprints are
//! computed on a rayon pool and then recorded by a single writer in
//! resolver order, so the final index matches a sequential run.

mod executor;

pub use executor::{DetectionResult, Detector, DetectorBuilder, DetectorConfig};
