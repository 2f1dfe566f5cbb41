//! Fingerprinting algorithm implementations.

mod content;
mod perceptual;
mod pixel;

pub use content::ContentHasher;
pub use perceptual::{PerceptualHasher, PerceptualSignature, BLOCK_SIZE, SCALE, SIDE};
pub use pixel::PixelHasher;
