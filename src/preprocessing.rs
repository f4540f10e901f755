// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Observation preprocessing for classifier inference.
//!
//! This module turns the raw string tokens supplied on the command line into
//! the encoded numeric row the classifier scores, in exact schema order.

use ndarray::{Array1, ArrayView1};

use crate::error::{InferenceError, Result};
use crate::schema::{FEATURE_COUNT, FEATURES, FeatureKind, FeatureSpec};

/// A single encoded observation.
///
/// One row of feature values, built once from raw tokens and never mutated.
/// Values are stored in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    values: Array1<f64>,
}

impl Observation {
    /// Build an observation from raw string tokens.
    ///
    /// Tokens must be supplied in schema order. Numeric features must parse
    /// as finite floats; the categorical `OverTime` feature accepts
    /// yes/no (case-insensitive) or 0/1.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Raw feature values, one per schema column.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the token count does not match the schema
    /// or any token fails to encode.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        if tokens.len() != FEATURE_COUNT {
            return Err(InferenceError::SchemaError(format!(
                "Expected {FEATURE_COUNT} features, got {}",
                tokens.len()
            )));
        }

        let mut values = Array1::zeros(FEATURE_COUNT);
        for (i, (spec, token)) in FEATURES.iter().zip(tokens.iter()).enumerate() {
            values[i] = encode_token(spec, i, token.as_ref())?;
        }

        Ok(Self { values })
    }

    /// Number of encoded values (always the schema length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the observation is empty. Never true for a constructed row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// View of the encoded row in schema order.
    #[must_use]
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }
}

/// Encode one raw token according to its feature spec.
fn encode_token(spec: &FeatureSpec, index: usize, token: &str) -> Result<f64> {
    match spec.kind {
        FeatureKind::Numeric => encode_numeric(spec.name, index, token),
        FeatureKind::Categorical => encode_categorical(spec.name, index, token),
    }
}

fn encode_numeric(name: &str, index: usize, token: &str) -> Result<f64> {
    let value: f64 = token.trim().parse().map_err(|_| {
        InferenceError::SchemaError(format!(
            "feature '{name}' (position {index}): invalid numeric value '{token}'"
        ))
    })?;

    if !value.is_finite() {
        return Err(InferenceError::SchemaError(format!(
            "feature '{name}' (position {index}): non-finite value '{token}'"
        )));
    }

    Ok(value)
}

fn encode_categorical(name: &str, index: usize, token: &str) -> Result<f64> {
    match token.trim().to_lowercase().as_str() {
        "yes" | "y" | "1" | "true" => Ok(1.0),
        "no" | "n" | "0" | "false" => Ok(0.0),
        _ => Err(InferenceError::SchemaError(format!(
            "feature '{name}' (position {index}): expected yes/no, got '{token}'"
        ))),
    }
}
