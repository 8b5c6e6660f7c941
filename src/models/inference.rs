//! Image scoring engine: shape validation, last-score state, and model
//! dispatch.

use crate::config::{DetectionConfig, ScorerConfig};
use crate::features::LumaExtractor;
use crate::metrics::ScorerMetrics;
use crate::models::scorer::{LogisticBaseline, ScoringModel};
use crate::types::classification::{Classification, Confidence, Label, ScoreError};
use crate::types::shape::InputShape;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Scores pixel buffers against the configured input shape.
///
/// Holds the two pieces of mutable state the wire contract exposes: the
/// expected input shape and the probability from the most recent
/// classification attempt. Failed attempts reset the stored score to
/// 0.0, so `last_score` always reflects the latest call.
pub struct ImageScorer {
    shape: InputShape,
    model: Box<dyn ScoringModel>,
    extractor: LumaExtractor,
    detection: DetectionConfig,
    last_score: f32,
    metrics: Arc<ScorerMetrics>,
}

impl ImageScorer {
    /// Create a scorer with the baseline logistic model.
    pub fn new(config: &ScorerConfig) -> Self {
        Self::with_model(config, Box::new(LogisticBaseline::new()))
    }

    /// Create a scorer with a custom scoring model.
    pub fn with_model(config: &ScorerConfig, model: Box<dyn ScoringModel>) -> Self {
        info!(
            model = model.name(),
            shape = %config.input,
            "image scorer initialized"
        );

        Self {
            shape: config.input,
            model,
            extractor: LumaExtractor::new(),
            detection: config.detection.clone(),
            last_score: 0.0,
            metrics: Arc::new(ScorerMetrics::new()),
        }
    }

    /// Replace the expected input shape.
    ///
    /// Invalid dimensions leave the current shape in force. The wire
    /// contract gives the caller no failure signal here; the warn trace
    /// is the only breadcrumb.
    pub fn set_input_shape(&mut self, width: i32, height: i32, channels: i32) {
        match InputShape::new(width, height, channels) {
            Ok(shape) => {
                debug!(%shape, "input shape updated");
                self.shape = shape;
            }
            Err(e) => warn!(error = %e, "ignoring invalid input shape"),
        }
    }

    /// Classify a pixel buffer claimed to have the given dimensions.
    ///
    /// The claimed dimensions must match the configured shape exactly and
    /// the buffer must be present with the matching byte length. Any
    /// failure resets the stored score to 0.0 before reporting.
    pub fn classify(
        &mut self,
        pixels: Option<&[u8]>,
        width: i32,
        height: i32,
        channels: i32,
    ) -> Result<Classification, ScoreError> {
        match self.try_classify(pixels, width, height, channels) {
            Ok(result) => Ok(result),
            Err(e) => {
                self.last_score = 0.0;
                self.metrics.record_reject();
                warn!(error = %e, "frame rejected");
                Err(e)
            }
        }
    }

    fn try_classify(
        &mut self,
        pixels: Option<&[u8]>,
        width: i32,
        height: i32,
        channels: i32,
    ) -> Result<Classification, ScoreError> {
        let pixels = pixels.ok_or(ScoreError::MissingBuffer)?;

        if !self.shape.matches(width, height, channels) {
            return Err(ScoreError::ShapeMismatch {
                width,
                height,
                channels,
                expected: self.shape,
            });
        }

        let expected = self.shape.byte_len();
        if pixels.len() != expected {
            return Err(ScoreError::BufferLength {
                got: pixels.len(),
                expected,
            });
        }

        let feature = self.extractor.mean_luma(pixels, &self.shape);
        let score = self.model.score(feature);
        self.last_score = score as f32;

        let label = Label::from_score(score, self.detection.threshold);
        let confidence =
            Confidence::from_score(score, self.detection.threshold, &self.detection.confidence);
        self.metrics.record_frame(score, label);

        debug!(
            model = self.model.name(),
            feature,
            score,
            label = ?label,
            "frame classified"
        );

        Ok(Classification {
            label,
            score,
            confidence,
        })
    }

    /// Probability stored by the most recent classification attempt.
    pub fn last_score(&self) -> f32 {
        self.last_score
    }

    /// Currently configured input shape.
    pub fn input_shape(&self) -> InputShape {
        self.shape
    }

    /// Shared handle to the scoring counters.
    pub fn metrics(&self) -> Arc<ScorerMetrics> {
        self.metrics.clone()
    }
}

impl Default for ImageScorer {
    fn default() -> Self {
        Self::new(&ScorerConfig::default())
    }
}
