//! Waste-sorting image scorer, deployable to WebAssembly.
//!
//! Scores camera frames as plastic vs paper from mean luma. The current
//! model is an explicit placeholder (fixed linear-plus-logistic curve)
//! sitting behind the [`ScoringModel`] trait, so a trained model can
//! replace it without touching shape validation or the wire contract.

pub mod config;
pub mod features;
pub mod metrics;
pub mod models;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use config::ScorerConfig;
pub use features::LumaExtractor;
pub use metrics::ScorerMetrics;
pub use models::inference::ImageScorer;
pub use models::scorer::{LogisticBaseline, ScoringModel};
pub use types::classification::{Classification, Confidence, Label, ScoreError};
pub use types::shape::InputShape;
