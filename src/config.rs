//! Configuration for the image scorer

use crate::types::classification::ConfidenceThresholds;
use crate::types::shape::InputShape;
use serde::Deserialize;

/// Scorer configuration.
///
/// Native embeddings load this from `config/config.toml`; the wasm
/// build uses the defaults and reconfigures the shape over the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    pub input: InputShape,
    pub detection: DetectionConfig,
    pub logging: LoggingConfig,
}

/// Detection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Scores at or above this value classify as plastic
    pub threshold: f64,
    /// Confidence margin thresholds
    pub confidence: ConfidenceThresholds,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            confidence: ConfidenceThresholds::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ScorerConfig {
    /// Load configuration from the default file location.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;
        use config::{Config, File};

        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

/// Install the global tracing subscriber, honoring `RUST_LOG` over the
/// configured level.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(logging.level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScorerConfig::default();
        assert_eq!(config.input, InputShape::default());
        assert_eq!(config.detection.threshold, 0.5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_load_sample_config() {
        let config = ScorerConfig::load().unwrap();
        assert_eq!(config.input.width, 96);
        assert_eq!(config.input.channels, 3);
        assert_eq!(config.detection.threshold, 0.5);
    }
}
