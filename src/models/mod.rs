//! Scoring model components

pub mod inference;
pub mod scorer;

pub use inference::ImageScorer;
pub use scorer::{LogisticBaseline, ScoringModel};
