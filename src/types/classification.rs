//! Classification results and error types

use crate::types::shape::InputShape;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary class assigned to a scored frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Paper,
    Plastic,
}

impl Label {
    /// Pick the class from a probability: plastic at or above the
    /// decision threshold, paper below it.
    pub fn from_score(score: f64, threshold: f64) -> Self {
        if score >= threshold {
            Label::Plastic
        } else {
            Label::Paper
        }
    }

    /// Wire code returned over the boundary (0 = paper, 1 = plastic).
    pub fn code(self) -> i32 {
        match self {
            Label::Paper => 0,
            Label::Plastic => 1,
        }
    }
}

/// How far the score sits from the decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Determine confidence from the score's margin against the decision
    /// threshold, scaled so a saturated score (0.0 or 1.0) has margin 1.
    pub fn from_score(score: f64, threshold: f64, thresholds: &ConfidenceThresholds) -> Self {
        let margin = ((score - threshold).abs() * 2.0).min(1.0);
        if margin >= thresholds.high {
            Confidence::High
        } else if margin >= thresholds.medium {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Configurable confidence margin thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceThresholds {
    pub medium: f64,
    pub high: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            medium: 0.4,
            high: 0.8,
        }
    }
}

/// Result of one successful classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Assigned class
    pub label: Label,
    /// Plastic probability in (0, 1)
    pub score: f64,
    /// Margin-based confidence in the assigned class
    pub confidence: Confidence,
}

/// Errors from shape configuration and classification.
///
/// Over the wire every classify-path failure collapses to the sentinel
/// code -1; native callers get the distinct variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Dimensions that can never describe a frame (non-positive size or
    /// unsupported channel count).
    #[error("invalid input shape {width}x{height}x{channels}")]
    InvalidShape {
        width: i32,
        height: i32,
        channels: i32,
    },

    /// Claimed dimensions differ from the configured input shape.
    #[error("input shape mismatch: got {width}x{height}x{channels}, expected {expected}")]
    ShapeMismatch {
        width: i32,
        height: i32,
        channels: i32,
        expected: InputShape,
    },

    /// No pixel buffer was supplied.
    #[error("pixel buffer is missing")]
    MissingBuffer,

    /// Buffer length disagrees with the configured shape.
    #[error("pixel buffer holds {got} bytes, expected {expected}")]
    BufferLength { got: usize, expected: usize },
}
