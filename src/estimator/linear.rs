// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Logistic regression estimator.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::error::{InferenceError, Result};
use crate::estimator::sigmoid;

/// Logistic regression parameters.
///
/// When `mean`/`scale` are present the row is standardized before the dot
/// product, matching a training pipeline that fits a scaler in front of the
/// classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Per-feature coefficients in schema order.
    pub coefficients: Vec<f64>,
    /// Intercept term.
    pub intercept: f64,
    /// Per-feature standardization means, if the model was trained scaled.
    #[serde(default)]
    pub mean: Option<Vec<f64>>,
    /// Per-feature standardization scales. Must be positive.
    #[serde(default)]
    pub scale: Option<Vec<f64>>,
}

impl LogisticRegression {
    /// Create an unscaled logistic regression.
    #[must_use]
    pub const fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            mean: None,
            scale: None,
        }
    }

    /// Positive-class probability for an encoded row.
    ///
    /// # Errors
    ///
    /// Returns a prediction error if the row length or any standardization
    /// vector length disagrees with the coefficients, or a scale entry is
    /// not positive.
    pub fn predict_proba(&self, row: ArrayView1<'_, f64>) -> Result<f64> {
        if row.len() != self.coefficients.len() {
            return Err(InferenceError::PredictionError(format!(
                "row has {} values, model expects {}",
                row.len(),
                self.coefficients.len()
            )));
        }

        let mut z = self.intercept;
        for (i, (&value, &coef)) in row.iter().zip(self.coefficients.iter()).enumerate() {
            z += coef * self.standardize(i, value)?;
        }

        Ok(sigmoid(z))
    }

    fn standardize(&self, index: usize, value: f64) -> Result<f64> {
        let (Some(mean), Some(scale)) = (&self.mean, &self.scale) else {
            return Ok(value);
        };

        if mean.len() != self.coefficients.len() || scale.len() != self.coefficients.len() {
            return Err(InferenceError::PredictionError(
                "standardization vectors do not match coefficient count".to_string(),
            ));
        }

        let s = scale[index];
        if s <= 0.0 {
            return Err(InferenceError::PredictionError(format!(
                "non-positive scale {s} at feature {index}"
            )));
        }

        Ok((value - mean[index]) / s)
    }
}
