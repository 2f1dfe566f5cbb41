//! Pixel hash: xxh3 over the decoded RGB buffer.
//!
//! Insensitive to the container, so a PNG and a BMP holding the same
//! pixels fall into one group.

use super::super::fast_decode::FastDecoder;
use super::super::traits::{ColorMode, Fingerprint, HashAlgorithm};
use crate::error::HashError;
use image::DynamicImage;
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

/// Hashes fully decoded pixel data
#[derive(Debug, Default)]
pub struct PixelHasher;

impl PixelHasher {
    pub fn new() -> Self {
        Self
    }

    /// Fingerprint of an image's 8-bit RGB representation
    pub fn hash_image(&self, image: &DynamicImage) -> Fingerprint {
        match image {
            DynamicImage::ImageRgb8(buffer) => Fingerprint::new(xxh3_64(buffer.as_raw())),
            other => Fingerprint::new(xxh3_64(other.to_rgb8().as_raw())),
        }
    }
}

impl HashAlgorithm for PixelHasher {
    fn hash_file(&self, path: &Path) -> Result<Fingerprint, HashError> {
        let image = FastDecoder::decode(path, ColorMode::Color)?;
        Ok(self.hash_image(&image))
    }
}
