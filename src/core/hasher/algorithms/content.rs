//! Content hash: xxh3 over the raw file bytes.
//!
//! Byte-identical files match; any changed byte almost surely yields a
//! different fingerprint.

use super::super::traits::{Fingerprint, HashAlgorithm};
use crate::error::HashError;
use std::fs;
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

/// Hashes file bytes without decoding
#[derive(Debug, Default)]
pub struct ContentHasher;

impl ContentHasher {
    pub fn new() -> Self {
        Self
    }

    pub fn hash_bytes(&self, bytes: &[u8]) -> Fingerprint {
        Fingerprint::new(xxh3_64(bytes))
    }
}

impl HashAlgorithm for ContentHasher {
    fn hash_file(&self, path: &Path) -> Result<Fingerprint, HashError> {
        let bytes = fs::read(path).map_err(|e| HashError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(self.hash_bytes(&bytes))
    }
}
