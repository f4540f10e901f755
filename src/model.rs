// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Classifier loading and inference.
//!
//! This module provides the main `AttritionModel` struct for loading a
//! trained artifact and scoring observations.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{InferenceError, Result};
use crate::estimator::Estimator;
use crate::inference::InferenceConfig;
use crate::metadata::ModelMetadata;
use crate::preprocessing::Observation;
use crate::results::{Prediction, Speed};

/// On-disk artifact layout: metadata block plus estimator parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelArtifact {
    metadata: ModelMetadata,
    estimator: Estimator,
}

/// A trained attrition classifier.
///
/// This struct wraps a deserialized artifact and provides methods for
/// scoring single observations.
///
/// # Example
///
/// ```no_run
/// use attrition_inference::AttritionModel;
///
/// # fn main() -> Result<(), attrition_inference::InferenceError> {
/// let model = AttritionModel::load("attrition_model.json")?;
/// let tokens = ["5000", "Yes", "35", "10", "800", "5", "14000",
///               "60", "12", "1", "3", "15", "4", "2"];
/// let prediction = model.predict_tokens(&tokens)?;
/// println!("{}", prediction.label);
/// # Ok(())
/// # }
/// ```
pub struct AttritionModel {
    /// Artifact metadata (features, classes, provenance).
    metadata: ModelMetadata,
    /// The deserialized estimator.
    estimator: Estimator,
    /// Inference configuration.
    config: InferenceConfig,
}

impl AttritionModel {
    /// Load a classifier artifact with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON artifact file.
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact file doesn't exist or can't be
    /// loaded.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_config(path, InferenceConfig::default())
    }

    /// Load a classifier artifact with custom configuration.
    ///
    /// The embedded metadata is checked against the fixed feature schema so
    /// an artifact trained on different columns fails at load time.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON artifact file.
    /// * `config` - Custom inference configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, the JSON is malformed, the
    /// metadata disagrees with the schema, or the configuration is invalid.
    pub fn load_with_config<P: AsRef<Path>>(path: P, config: InferenceConfig) -> Result<Self> {
        let path = path.as_ref();

        config.validate()?;

        // Check if file exists
        if !path.exists() {
            return Err(InferenceError::ModelLoadError(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        let file = File::open(path).map_err(|e| {
            InferenceError::ModelLoadError(format!(
                "Failed to open {}: {e}",
                path.display()
            ))
        })?;

        let artifact: ModelArtifact =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                InferenceError::ModelLoadError(format!(
                    "Failed to parse {}: {e}",
                    path.display()
                ))
            })?;

        artifact.metadata.validate_schema()?;

        Ok(Self {
            metadata: artifact.metadata,
            estimator: artifact.estimator,
            config,
        })
    }

    /// Score an encoded observation.
    ///
    /// # Arguments
    ///
    /// * `observation` - The encoded feature row.
    ///
    /// # Returns
    ///
    /// A [`Prediction`] carrying probability, threshold, label, and timing.
    ///
    /// # Errors
    ///
    /// Returns an error if the estimator rejects the row.
    pub fn predict(&self, observation: &Observation) -> Result<Prediction> {
        let start_inference = Instant::now();
        let probability = self.estimator.predict_proba(observation.values())?;
        let inference_time = start_inference.elapsed().as_secs_f64() * 1000.0;

        Ok(Prediction::new(
            probability,
            self.config.decision_threshold,
            Speed {
                preprocess: None,
                inference: Some(inference_time),
            },
        ))
    }

    /// Encode raw tokens and score the resulting observation.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Raw feature values in schema order.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the tokens fail to encode, or a prediction
    /// error from the estimator.
    pub fn predict_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Prediction> {
        let start_preprocess = Instant::now();
        let observation = Observation::from_tokens(tokens)?;
        let preprocess_time = start_preprocess.elapsed().as_secs_f64() * 1000.0;

        let mut prediction = self.predict(&observation)?;
        prediction.speed.preprocess = Some(preprocess_time);
        Ok(prediction)
    }

    /// Positive-class probability for an encoded observation.
    ///
    /// # Errors
    ///
    /// Returns an error if the estimator rejects the row.
    pub fn predict_proba(&self, observation: &Observation) -> Result<f64> {
        self.estimator.predict_proba(observation.values())
    }

    /// Get the artifact metadata.
    #[must_use]
    pub const fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Get the estimator kind tag.
    #[must_use]
    pub const fn estimator_kind(&self) -> &'static str {
        self.estimator.kind()
    }

    /// Get the configured decision threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.config.decision_threshold
    }
}

impl std::fmt::Debug for AttritionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttritionModel")
            .field("estimator", &self.estimator.kind())
            .field("num_features", &self.metadata.num_features())
            .field("threshold", &self.config.decision_threshold)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn artifact_json(intercept: f64) -> String {
        let features: Vec<String> = crate::schema::feature_names()
            .into_iter()
            .map(|name| format!("\"{name}\""))
            .collect();
        format!(
            r#"{{
                "metadata": {{ "features": [{}] }},
                "estimator": {{
                    "type": "logistic_regression",
                    "coefficients": [0,0,0,0,0,0,0,0,0,0,0,0,0,0],
                    "intercept": {intercept}
                }}
            }}"#,
            features.join(",")
        )
    }

    fn write_artifact(dir: &tempfile::TempDir, name: &str, json: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        path
    }

    fn tokens() -> Vec<&'static str> {
        vec![
            "5000", "No", "35", "10", "800", "5", "14000", "60", "12", "1", "3", "15", "4", "2",
        ]
    }

    #[test]
    fn test_model_not_found() {
        let result = AttritionModel::load("nonexistent.json");
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            InferenceError::ModelLoadError(_)
        ));
    }

    #[test]
    fn test_load_and_predict() {
        let dir = tempfile::tempdir().unwrap();
        // Zero coefficients, intercept 0 -> p = 0.5 >= 0.3 -> Yes.
        let path = write_artifact(&dir, "model.json", &artifact_json(0.0));

        let model = AttritionModel::load(&path).unwrap();
        assert_eq!(model.estimator_kind(), "logistic_regression");
        assert!((model.threshold() - 0.3).abs() < f64::EPSILON);

        let prediction = model.predict_tokens(&tokens()).unwrap();
        assert!((prediction.probability - 0.5).abs() < 1e-12);
        assert_eq!(prediction.label.as_str(), "Yes");
        assert!(prediction.speed.preprocess.is_some());
        assert!(prediction.speed.inference.is_some());
    }

    #[test]
    fn test_negative_prediction() {
        let dir = tempfile::tempdir().unwrap();
        // Intercept -3 -> p = sigmoid(-3) ~= 0.047 < 0.3 -> No.
        let path = write_artifact(&dir, "model.json", &artifact_json(-3.0));

        let model = AttritionModel::load(&path).unwrap();
        let prediction = model.predict_tokens(&tokens()).unwrap();
        assert!(prediction.probability < 0.3);
        assert_eq!(prediction.label.as_str(), "No");
    }

    #[test]
    fn test_custom_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(&dir, "model.json", &artifact_json(0.0));

        let config = InferenceConfig::new().with_threshold(0.6);
        let model = AttritionModel::load_with_config(&path, config).unwrap();
        // p = 0.5 < 0.6 -> No.
        let prediction = model.predict_tokens(&tokens()).unwrap();
        assert_eq!(prediction.label.as_str(), "No");
    }

    #[test]
    fn test_invalid_config_rejected_before_load() {
        let config = InferenceConfig::new().with_threshold(2.0);
        let result = AttritionModel::load_with_config("nonexistent.json", config);
        assert!(matches!(
            result.unwrap_err(),
            InferenceError::ConfigError(_)
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(&dir, "model.json", "{ not json");
        let result = AttritionModel::load(&path);
        assert!(matches!(
            result.unwrap_err(),
            InferenceError::ModelLoadError(_)
        ));
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"{
            "metadata": { "features": ["A", "B"] },
            "estimator": {
                "type": "logistic_regression",
                "coefficients": [0.0, 0.0],
                "intercept": 0.0
            }
        }"#;
        let path = write_artifact(&dir, "model.json", json);
        let result = AttritionModel::load(&path);
        assert!(matches!(
            result.unwrap_err(),
            InferenceError::MetadataError(_)
        ));
    }
}
