//! Type definitions for the image scorer

pub mod classification;
pub mod shape;

pub use classification::{Classification, Confidence, Label, ScoreError};
pub use shape::InputShape;
