//! # Hasher Module
//!
//! Maps a file to the fingerprint used as its grouping key.
//!
//! ## Strategies
//! - **fast** (`Content`) - xxh3 of the raw file bytes
//! - **exact** (`Pixel`) - xxh3 of the decoded RGB pixels
//! - **phash** (`Perceptual`, default) - DCT signature of a 32x32 grayscale
//!   thumbnail
//!
//! ## Decoding and Resampling
//! - Uses `zune-jpeg` for 1.5-2x faster JPEG decoding
//! - `resample` shrinks by exact area averaging, weighting partially
//!   covered pixels, so sizes that are not a multiple of 32 are handled
//!
//! ## Example
//! ```rust,ignore
//! use dupe_detect::core::hasher::HashStrategy;
//!
//! let strategy = HashStrategy::from_mode("exact");
//! let fingerprint = strategy.fingerprint(&path)?;
//! ```

mod algorithms;
pub mod fast_decode;
pub mod resample;
mod traits;

pub use algorithms::{
    ContentHasher, PerceptualHasher, PerceptualSignature, PixelHasher, BLOCK_SIZE, SCALE, SIDE,
};
pub use traits::{ColorMode, Fingerprint, HashAlgorithm};

use crate::error::HashError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The three notions of "same image"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HashStrategy {
    /// Identical file bytes
    Content,
    /// Identical decoded pixels
    Pixel,
    /// Identical perceptual signature
    #[default]
    Perceptual,
}

impl HashStrategy {
    /// Resolve a command-line mode name.
    ///
    /// `fast`, `exact` and `phash` are recognized; anything else selects the
    /// perceptual strategy.
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "fast" => HashStrategy::Content,
            "exact" => HashStrategy::Pixel,
            "phash" => HashStrategy::Perceptual,
            other => {
                tracing::debug!(mode = other, "unknown hash mode, using phash");
                HashStrategy::Perceptual
            }
        }
    }

    /// The command-line name of the strategy
    pub fn mode(&self) -> &'static str {
        match self {
            HashStrategy::Content => "fast",
            HashStrategy::Pixel => "exact",
            HashStrategy::Perceptual => "phash",
        }
    }

    /// Compute the fingerprint of a file with this strategy.
    pub fn fingerprint(&self, path: &Path) -> Result<Fingerprint, HashError> {
        match self {
            HashStrategy::Content => ContentHasher::new().hash_file(path),
            HashStrategy::Pixel => PixelHasher::new().hash_file(path),
            HashStrategy::Perceptual => PerceptualHasher::new().hash_file(path),
        }
    }
}

impl std::fmt::Display for HashStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mode())
    }
}
