// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Inference configuration and common types.
//!
//! This module defines the [`InferenceConfig`] struct, which controls the
//! decision threshold applied to the estimator's positive-class probability.

use crate::error::{InferenceError, Result};

/// Default decision threshold, selected empirically by the training
/// pipeline.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Default model artifact path, relative to the working directory.
pub const DEFAULT_MODEL: &str = "attrition_model.json";

/// Configuration for classifier inference.
///
/// This struct is used to customize the behavior of the inference engine.
/// It uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use attrition_inference::InferenceConfig;
///
/// let config = InferenceConfig::new().with_threshold(0.5);
/// ```
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Decision threshold for the positive class (0.0 to 1.0).
    /// Probabilities greater than or equal to this value map to `Yes`.
    pub decision_threshold: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            decision_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decision threshold.
    ///
    /// # Arguments
    ///
    /// * `threshold` - The positive-class cutoff (0.0 to 1.0).
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.decision_threshold = threshold;
        self
    }

    /// Check the configuration for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns a config error if the threshold is outside [0.0, 1.0] or not
    /// finite.
    pub fn validate(&self) -> Result<()> {
        if !self.decision_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.decision_threshold)
        {
            return Err(InferenceError::ConfigError(format!(
                "decision threshold {} outside [0.0, 1.0]",
                self.decision_threshold
            )));
        }
        Ok(())
    }
}
