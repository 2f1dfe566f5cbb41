//! Fingerprint type and the hashing trait.

use crate::error::HashError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grouping key produced by a hash strategy.
///
/// Two files with equal fingerprints are duplicates; nothing else is
/// compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint(u64);

impl Fingerprint {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Fixed-width hexadecimal rendering
    pub fn to_hex(&self) -> String {
        format!("{:016x}", self.0)
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Pixel layout requested from the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// One 8-bit luma channel
    Grayscale,
    /// Three 8-bit channels
    Color,
}

/// Trait for the fingerprinting algorithms
pub trait HashAlgorithm: Send + Sync {
    /// Compute the fingerprint of a file.
    ///
    /// The file is opened, read once and released before returning.
    fn hash_file(&self, path: &Path) -> Result<Fingerprint, HashError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_zero_padded() {
        assert_eq!(Fingerprint::new(0xbeef).to_hex(), "000000000000beef");
    }

    #[test]
    fn display_matches_hex() {
        let fingerprint = Fingerprint::new(u64::MAX);
        assert_eq!(fingerprint.to_string(), "ffffffffffffffff");
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Fingerprint::new(7), Fingerprint::new(7));
        assert_ne!(Fingerprint::new(7), Fingerprint::new(8));
    }
}
