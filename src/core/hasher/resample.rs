//! Area-averaging resize of floating-point grayscale planes.
//!
//! Shrinking an axis weights each source pixel by the fraction of it that
//! lies under the destination cell. Enlarging an axis interpolates
//! linearly between pixel centres. Each axis is resampled on its own,
//! rows first.

/// A single-channel `f32` image in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct GrayPlane {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<f32>,
}

impl GrayPlane {
    /// Build a plane from 8-bit luma samples
    pub fn from_luma8(width: u32, height: u32, samples: &[u8]) -> Self {
        Self {
            width,
            height,
            pixels: samples.iter().map(|&v| v as f32).collect(),
        }
    }

    /// Resize to `width` x `height` with area averaging.
    ///
    /// A plane that already has the target size is returned unchanged.
    pub fn resize_area(&self, width: u32, height: u32) -> Result<GrayPlane, String> {
        if self.width == 0 || self.height == 0 {
            return Err("Invalid source dimensions".to_string());
        }
        if width == 0 || height == 0 {
            return Err("Invalid destination dimensions".to_string());
        }
        if self.pixels.len() != self.width as usize * self.height as usize {
            return Err("Pixel count does not match dimensions".to_string());
        }
        if self.width == width && self.height == height {
            return Ok(self.clone());
        }

        let (src_w, src_h) = (self.width as usize, self.height as usize);
        let (dst_w, dst_h) = (width as usize, height as usize);
        let columns = axis_taps(src_w, dst_w);
        let rows = axis_taps(src_h, dst_h);

        // src_h x dst_w
        let mut horizontal = Vec::with_capacity(src_h * dst_w);
        for row in self.pixels.chunks_exact(src_w) {
            horizontal.extend(columns.iter().map(|taps| taps.apply(|j| row[j] as f64)));
        }

        let mut pixels = Vec::with_capacity(dst_w * dst_h);
        for taps in &rows {
            pixels.extend((0..dst_w).map(|x| taps.apply(|j| horizontal[j * dst_w + x]) as f32));
        }

        Ok(GrayPlane {
            width,
            height,
            pixels,
        })
    }
}

/// Consecutive source samples feeding one destination sample
#[derive(Debug, Clone, PartialEq)]
struct Taps {
    start: usize,
    weights: Vec<f64>,
}

impl Taps {
    fn apply(&self, sample: impl Fn(usize) -> f64) -> f64 {
        self.weights
            .iter()
            .enumerate()
            .map(|(k, weight)| sample(self.start + k) * weight)
            .sum()
    }
}

/// Taps for every destination sample of one axis
fn axis_taps(src: usize, dst: usize) -> Vec<Taps> {
    let ratio = src as f64 / dst as f64;
    (0..dst)
        .map(|i| {
            if ratio >= 1.0 {
                coverage_taps(i, ratio, src)
            } else {
                linear_taps(i, ratio, src)
            }
        })
        .collect()
}

/// Destination cell `i` spans `[i * ratio, (i + 1) * ratio)` in source
/// coordinates; weights are the overlap with each source pixel.
fn coverage_taps(i: usize, ratio: f64, src: usize) -> Taps {
    let lo = i as f64 * ratio;
    let hi = (i + 1) as f64 * ratio;
    let start = (lo.floor() as usize).min(src - 1);
    let end = (hi.ceil() as usize).clamp(start + 1, src);

    let weights = (start..end)
        .map(|j| {
            let overlap = hi.min((j + 1) as f64) - lo.max(j as f64);
            overlap.max(0.0) / ratio
        })
        .collect();

    Taps { start, weights }
}

/// Linear interpolation with pixel centres at `j + 0.5`, clamped at the
/// edges.
fn linear_taps(i: usize, ratio: f64, src: usize) -> Taps {
    let centre = ((i as f64 + 0.5) * ratio - 0.5).clamp(0.0, (src - 1) as f64);
    let start = centre.floor() as usize;
    let frac = centre - start as f64;

    if start + 1 < src {
        Taps {
            start,
            weights: vec![1.0 - frac, frac],
        }
    } else {
        Taps {
            start,
            weights: vec![1.0],
        }
    }
}
