//! # Core Module
//!
//! The terminal-agnostic duplicate detection engine.
//!
//! ## Modules
//! - `scanner` - Resolves input roots into candidate files
//! - `hasher` - Computes fingerprints (content, pixel, perceptual)
//! - `comparator` - Groups files sharing a fingerprint
//! - `reporter` - Renders progress and the final summary
//! - `pipeline` - Orchestrates the full workflow

pub mod comparator;
pub mod hasher;
pub mod pipeline;
pub mod reporter;
pub mod scanner;

// Re-export commonly used types
pub use comparator::{Group, GroupIndex};
pub use hasher::{Fingerprint, HashStrategy};
pub use pipeline::{DetectionResult, Detector, DetectorConfig};
pub use reporter::Reporter;
pub use scanner::{PathDisplay, PathResolver};
