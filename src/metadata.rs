// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Model artifact metadata.
//!
//! The training pipeline embeds a metadata block in every artifact it
//! exports: the feature list in training order, the class labels, and
//! provenance fields. The loader checks the feature list against the fixed
//! schema so a stale or reordered artifact fails fast instead of silently
//! scoring columns in the wrong order.

use serde::{Deserialize, Serialize};

use crate::error::{InferenceError, Result};
use crate::schema::{FEATURE_COUNT, FEATURES, feature_names};

/// Metadata embedded in a classifier artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Human-readable model description.
    #[serde(default)]
    pub description: String,
    /// Version of the training pipeline that exported the artifact.
    #[serde(default)]
    pub version: String,
    /// Export date.
    #[serde(default)]
    pub trained_at: String,
    /// Feature names in the order the model was trained on.
    pub features: Vec<String>,
    /// Class labels, negative class first.
    #[serde(default = "default_classes")]
    pub classes: Vec<String>,
    /// The class whose probability the estimator reports.
    #[serde(default = "default_positive_class")]
    pub positive_class: String,
}

fn default_classes() -> Vec<String> {
    vec!["No".to_string(), "Yes".to_string()]
}

fn default_positive_class() -> String {
    "Yes".to_string()
}

impl ModelMetadata {
    /// Check the embedded feature list against the fixed schema.
    ///
    /// # Errors
    ///
    /// Returns a metadata error naming the first disagreement if the count
    /// or any name/position differs.
    pub fn validate_schema(&self) -> Result<()> {
        if self.features.len() != FEATURE_COUNT {
            return Err(InferenceError::MetadataError(format!(
                "artifact lists {} features, schema has {FEATURE_COUNT}",
                self.features.len()
            )));
        }

        for (i, (actual, spec)) in self.features.iter().zip(FEATURES.iter()).enumerate() {
            if actual != spec.name {
                return Err(InferenceError::MetadataError(format!(
                    "artifact feature {i} is '{actual}', expected '{}'",
                    spec.name
                )));
            }
        }

        Ok(())
    }

    /// Number of features the artifact was trained on.
    #[must_use]
    pub fn num_features(&self) -> usize {
        self.features.len()
    }

    /// Number of classes.
    #[must_use]
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }
}

impl Default for ModelMetadata {
    fn default() -> Self {
        Self {
            description: String::new(),
            version: String::new(),
            trained_at: String::new(),
            features: feature_names().into_iter().map(String::from).collect(),
            classes: default_classes(),
            positive_class: default_positive_class(),
        }
    }
}
