//! Replaceable scoring models.

/// Maps the extracted luma feature to a plastic probability in (0, 1).
///
/// Shape validation and last-score bookkeeping live outside this trait,
/// so a trained model can replace the baseline without touching the
/// wire contract.
pub trait ScoringModel: Send {
    /// Score a feature value in [0, 1] into a probability.
    fn score(&self, feature: f64) -> f64;

    /// Model name for logs.
    fn name(&self) -> &'static str;
}

/// Placeholder model: fixed linear rescaling of the feature followed by
/// the standard logistic function. Brighter frames score closer to
/// plastic. The slope is an arbitrary sensitivity constant, not a
/// learned parameter.
// TODO: swap in the trained waste model once it is exported.
pub struct LogisticBaseline {
    slope: f64,
    center: f64,
}

impl LogisticBaseline {
    pub fn new() -> Self {
        Self {
            slope: 6.0,
            center: 0.5,
        }
    }
}

impl ScoringModel for LogisticBaseline {
    fn score(&self, feature: f64) -> f64 {
        let logit = self.slope * (feature - self.center);
        1.0 / (1.0 + (-logit).exp())
    }

    fn name(&self) -> &'static str {
        "logistic_baseline"
    }
}

impl Default for LogisticBaseline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_feature_scores_half() {
        let model = LogisticBaseline::new();
        assert!((model.score(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_features() {
        let model = LogisticBaseline::new();

        // logit -3.0 and +3.0 at the feature extremes
        let low = model.score(0.0);
        let high = model.score(1.0);

        assert!((low - 0.047425873177566781).abs() < 1e-12);
        assert!((high - 0.952574126822433219).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic_in_feature() {
        let model = LogisticBaseline::new();

        let mut prev = 0.0;
        for step in 0..=10 {
            let score = model.score(step as f64 / 10.0);
            assert!(score > prev);
            prev = score;
        }
    }
}
