// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Classifier estimators.
//!
//! The artifact's `estimator` block is a tagged union over the model
//! families the training pipeline exports: a linear (logistic regression)
//! model or a gradient-boosted tree ensemble. Both reduce to one operation
//! here: the positive-class probability for an encoded row.

pub mod forest;
pub mod linear;

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use forest::{GradientBoosting, Node, Tree};
pub use linear::LogisticRegression;

/// A deserialized classifier estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
    /// Logistic regression over optionally standardized features.
    LogisticRegression(LogisticRegression),
    /// Gradient-boosted decision tree ensemble.
    GradientBoosting(GradientBoosting),
}

impl Estimator {
    /// Compute the positive-class probability for an encoded row.
    ///
    /// # Arguments
    ///
    /// * `row` - Encoded feature values in schema order.
    ///
    /// # Errors
    ///
    /// Returns a prediction error if the row length disagrees with the
    /// estimator's parameters or the estimator is malformed.
    pub fn predict_proba(&self, row: ArrayView1<'_, f64>) -> Result<f64> {
        match self {
            Self::LogisticRegression(model) => model.predict_proba(row),
            Self::GradientBoosting(model) => model.predict_proba(row),
        }
    }

    /// Returns the string tag used in the artifact.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LogisticRegression(_) => "logistic_regression",
            Self::GradientBoosting(_) => "gradient_boosting",
        }
    }
}

/// Standard logistic sigmoid.
#[must_use]
pub(crate) fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
