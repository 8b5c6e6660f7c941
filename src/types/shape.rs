//! Input shape configuration for incoming pixel buffers

use crate::types::classification::ScoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expected layout of an incoming pixel buffer.
///
/// Buffers are row-major with one unsigned byte per channel value,
/// channel-interleaved in RGB order when `channels` is 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputShape {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// 3 for RGB, 1 for grayscale
    pub channels: u32,
}

impl InputShape {
    /// Validate raw wire dimensions into a shape.
    ///
    /// Width and height must be positive and the channel count must be
    /// 1 or 3; anything else is `ScoreError::InvalidShape`.
    pub fn new(width: i32, height: i32, channels: i32) -> Result<Self, ScoreError> {
        if width > 0 && height > 0 && (channels == 1 || channels == 3) {
            Ok(Self {
                width: width as u32,
                height: height as u32,
                channels: channels as u32,
            })
        } else {
            Err(ScoreError::InvalidShape {
                width,
                height,
                channels,
            })
        }
    }

    /// Whether the claimed wire dimensions match this shape exactly.
    pub fn matches(&self, width: i32, height: i32, channels: i32) -> bool {
        width == self.width as i32 && height == self.height as i32 && channels == self.channels as i32
    }

    /// Number of pixels in a frame.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Expected buffer length in bytes.
    pub fn byte_len(&self) -> usize {
        self.pixel_count() * self.channels as usize
    }
}

impl Default for InputShape {
    fn default() -> Self {
        Self {
            width: 96,
            height: 96,
            channels: 3,
        }
    }
}

impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape() {
        let shape = InputShape::default();
        assert_eq!(shape.width, 96);
        assert_eq!(shape.height, 96);
        assert_eq!(shape.channels, 3);
        assert_eq!(shape.byte_len(), 96 * 96 * 3);
    }

    #[test]
    fn test_valid_shapes() {
        assert!(InputShape::new(1, 1, 1).is_ok());
        assert!(InputShape::new(640, 480, 3).is_ok());
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(InputShape::new(0, 96, 3).is_err());
        assert!(InputShape::new(96, -1, 3).is_err());
        assert!(InputShape::new(96, 96, 2).is_err());
        assert!(InputShape::new(96, 96, 4).is_err());
        assert!(InputShape::new(96, 96, 0).is_err());
    }

    #[test]
    fn test_matches() {
        let shape = InputShape::default();
        assert!(shape.matches(96, 96, 3));
        assert!(!shape.matches(96, 96, 1));
        assert!(!shape.matches(64, 96, 3));
        assert!(!shape.matches(96, 64, 3));
    }
}
