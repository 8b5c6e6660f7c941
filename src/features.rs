//! Luma feature extraction from raw pixel buffers.
//!
//! The scorer reduces a frame to a single scalar: mean normalized
//! brightness over all pixels. RGB frames use the BT.709 perceptual
//! weighting; grayscale frames use the channel value directly.

use crate::types::shape::InputShape;

const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// Extracts the mean-luma feature from a pixel buffer.
pub struct LumaExtractor;

impl LumaExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Mean normalized brightness over all pixels, in [0, 1].
    ///
    /// The buffer must hold exactly `shape.byte_len()` bytes; callers
    /// validate length before calling.
    pub fn mean_luma(&self, pixels: &[u8], shape: &InputShape) -> f64 {
        debug_assert_eq!(pixels.len(), shape.byte_len());

        let n = shape.pixel_count();
        if n == 0 {
            return 0.0;
        }

        let mut sum = 0.0_f64;
        if shape.channels == 3 {
            for px in pixels.chunks_exact(3) {
                sum += LUMA_R * (px[0] as f64 / 255.0)
                    + LUMA_G * (px[1] as f64 / 255.0)
                    + LUMA_B * (px[2] as f64 / 255.0);
            }
        } else {
            for &v in pixels {
                sum += v as f64 / 255.0;
            }
        }

        sum / n as f64
    }
}

impl Default for LumaExtractor {
    fn default() -> Self {
        Self::new()
    }
}
