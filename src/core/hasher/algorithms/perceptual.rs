//! Perceptual Hash (pHash) implementation.
//!
//! 1. Decode as grayscale, convert to `f32`
//! 2. Area-average down to `SIDE` x `SIDE`
//! 3. 2-D DCT, keeping the `BLOCK_SIZE` x `BLOCK_SIZE` lowest frequencies
//! 4. Threshold each coefficient against the block's median
//!
//! Low frequencies survive resampling and mild compression, and the median
//! threshold cancels uniform brightness shifts. Signatures are compared
//! for exact equality only; a single bit that lands on the other side of
//! the median puts the image in a different group.

use super::super::fast_decode::FastDecoder;
use super::super::resample::GrayPlane;
use super::super::traits::{ColorMode, Fingerprint, HashAlgorithm};
use crate::error::HashError;
use image::DynamicImage;
use std::f64::consts::PI;
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

/// Side of the low-frequency block
pub const BLOCK_SIZE: usize = 8;
/// Oversampling factor of the DCT input relative to the block
pub const SCALE: usize = 4;
/// Side of the resized image fed into the DCT
pub const SIDE: usize = BLOCK_SIZE * SCALE;

/// The 64-bit DCT bitmap; bit `i` holds coefficient `i` in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PerceptualSignature(u64);

impl PerceptualSignature {
    /// Whether coefficient `index` was above the median
    pub fn bit(&self, index: usize) -> bool {
        (self.0 >> index) & 1 == 1
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::new(xxh3_64(&self.0.to_le_bytes()))
    }
}

/// DCT-based perceptual hasher
#[derive(Debug, Default)]
pub struct PerceptualHasher;

impl PerceptualHasher {
    pub fn new() -> Self {
        Self
    }

    /// Compute the signature of an already decoded image
    pub fn signature(&self, image: &DynamicImage) -> Result<PerceptualSignature, String> {
        let gray = image.to_luma8();
        let plane = GrayPlane::from_luma8(gray.width(), gray.height(), gray.as_raw());
        self.plane_signature(&plane)
    }

    /// Compute the signature of a grayscale plane of any size
    pub fn plane_signature(&self, plane: &GrayPlane) -> Result<PerceptualSignature, String> {
        let resized = plane.resize_area(SIDE as u32, SIDE as u32)?;

        let block = dct_low_frequency(&resized.pixels, SIDE, BLOCK_SIZE);
        let median = median(&block);

        let bits = block
            .iter()
            .enumerate()
            .filter(|&(_, &coefficient)| coefficient > median)
            .fold(0u64, |acc, (i, _)| acc | 1 << i);

        Ok(PerceptualSignature(bits))
    }
}

impl HashAlgorithm for PerceptualHasher {
    fn hash_file(&self, path: &Path) -> Result<Fingerprint, HashError> {
        let image = FastDecoder::decode(path, ColorMode::Grayscale)?;
        let signature = self.signature(&image).map_err(|reason| HashError::Resize {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(signature.fingerprint())
    }
}

/// Orthonormal 2-D DCT-II of a `size` x `size` plane, evaluated only for
/// the top-left `block` x `block` coefficients. Output is row-major with
/// the vertical frequency as the row.
fn dct_low_frequency(pixels: &[f32], size: usize, block: usize) -> Vec<f64> {
    let n = size as f64;
    let cos_table: Vec<f64> = (0..block)
        .flat_map(|u| {
            (0..size).map(move |x| ((2 * x + 1) as f64 * u as f64 * PI / (2.0 * n)).cos())
        })
        .collect();
    let scale = |k: usize| {
        if k == 0 {
            (1.0 / n).sqrt()
        } else {
            (2.0 / n).sqrt()
        }
    };

    // Rows: temp[y][u]
    let mut temp = vec![0.0; size * block];
    for y in 0..size {
        for u in 0..block {
            let sum: f64 = (0..size)
                .map(|x| pixels[y * size + x] as f64 * cos_table[u * size + x])
                .sum();
            temp[y * block + u] = sum * scale(u);
        }
    }

    // Columns: result[v][u]
    let mut result = vec![0.0; block * block];
    for v in 0..block {
        for u in 0..block {
            let sum: f64 = (0..size)
                .map(|y| temp[y * block + u] * cos_table[v * size + y])
                .sum();
            result[v * block + u] = sum * scale(v);
        }
    }

    result
}

/// Median with the two middle values averaged for even lengths
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgb};

    fn horizontal_gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageLuma8(ImageBuffer::from_fn(width, height, |x, _| {
            Luma([(x * 255 / (width - 1)) as u8])
        }))
    }

    fn mirrored_gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageLuma8(ImageBuffer::from_fn(width, height, |x, _| {
            Luma([255 - (x * 255 / (width - 1)) as u8])
        }))
    }

    /// Smooth non-separable scene with dimensions that are not multiples
    /// of `SIDE`
    fn smooth_plane(width: u32, height: u32) -> GrayPlane {
        let waves = [
            (20.0, 2.0, 3.0, 1.0),
            (25.0, 6.0, 5.0, 3.0),
            (20.0, 3.0, 6.0, 3.0),
            (30.0, 3.0, 4.0, 1.0),
        ];
        let samples: Vec<u8> = (0..width * height)
            .map(|i| {
                let (x, y) = ((i % width) as f64, (i / width) as f64);
                let value: f64 = waves
                    .iter()
                    .map(|&(amplitude, fx, fy, phase)| {
                        amplitude
                            * (PI * (fx * x / width as f64 + fy * y / height as f64) + phase).sin()
                    })
                    .sum();
                (128.0 + value) as u8
            })
            .collect();
        GrayPlane::from_luma8(width, height, &samples)
    }

    /// Blocky scene where every 2x2 cell is constant, so halving is exact
    fn blocky_scene(cell_px: u32) -> DynamicImage {
        let side = 32 * cell_px;
        DynamicImage::ImageRgb8(ImageBuffer::from_fn(side, side, |x, y| {
            let (cx, cy) = (x / cell_px, y / cell_px);
            let v = ((cx * 37 + cy * 91) % 200) as u8 + 20;
            Rgb([v, v / 2, 255 - v])
        }))
    }

    #[test]
    fn side_is_block_times_scale() {
        assert_eq!(SIDE, 32);
    }

    #[test]
    fn identical_images_produce_identical_signature() {
        let hasher = PerceptualHasher::new();
        let image = horizontal_gradient(100, 80);

        assert_eq!(
            hasher.signature(&image).unwrap(),
            hasher.signature(&image).unwrap()
        );
    }

    #[test]
    fn downscaled_copy_matches_original() {
        let hasher = PerceptualHasher::new();
        let original = blocky_scene(2);
        let half = blocky_scene(1);

        assert_eq!(
            hasher.signature(&original).unwrap(),
            hasher.signature(&half).unwrap()
        );
    }

    #[test]
    fn half_size_and_back_keeps_signature() {
        let hasher = PerceptualHasher::new();
        let original = smooth_plane(100, 76);
        let restored = original
            .resize_area(50, 38)
            .and_then(|half| half.resize_area(100, 76))
            .unwrap();

        assert_eq!(
            hasher.plane_signature(&original).unwrap(),
            hasher.plane_signature(&restored).unwrap()
        );
    }

    #[test]
    fn plane_and_image_paths_agree() {
        let hasher = PerceptualHasher::new();
        let plane = smooth_plane(100, 76);
        let samples: Vec<u8> = plane.pixels.iter().map(|&v| v as u8).collect();
        let image = DynamicImage::ImageLuma8(ImageBuffer::from_raw(100, 76, samples).unwrap());

        assert_eq!(
            hasher.signature(&image).unwrap(),
            hasher.plane_signature(&plane).unwrap()
        );
    }

    #[test]
    fn distinct_images_produce_distinct_signatures() {
        let hasher = PerceptualHasher::new();
        let rising = hasher.signature(&horizontal_gradient(64, 64)).unwrap();
        let falling = hasher.signature(&mirrored_gradient(64, 64)).unwrap();

        // The first horizontal frequency flips sign between the two
        assert_ne!(rising.bit(1), falling.bit(1));
        assert_ne!(rising.fingerprint(), falling.fingerprint());
    }

    #[test]
    fn brightness_shift_keeps_signature() {
        let hasher = PerceptualHasher::new();
        let base = blocky_scene(1).to_luma8();
        let brighter = ImageBuffer::from_fn(base.width(), base.height(), |x, y| {
            Luma([base.get_pixel(x, y)[0] + 10])
        });

        assert_eq!(
            hasher
                .signature(&DynamicImage::ImageLuma8(base.clone()))
                .unwrap(),
            hasher
                .signature(&DynamicImage::ImageLuma8(brighter))
                .unwrap()
        );
    }

    #[test]
    fn dct_of_constant_plane_has_only_dc() {
        let pixels = vec![10.0f32; SIDE * SIDE];
        let block = dct_low_frequency(&pixels, SIDE, BLOCK_SIZE);

        assert!((block[0] - 10.0 * SIDE as f64).abs() < 1e-9);
        assert!(block[1..].iter().all(|c| c.abs() < 1e-9));
    }

    #[test]
    fn median_averages_middle_pair() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[5.0, 1.0, 3.0]), 3.0);
    }

    #[test]
    fn bit_accessor_reads_row_major_positions() {
        let signature = PerceptualSignature(0b101);
        assert!(signature.bit(0));
        assert!(!signature.bit(1));
        assert!(signature.bit(2));
    }
}
