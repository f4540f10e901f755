// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Gradient-boosted tree ensemble estimator.
//!
//! Trees are stored as flat node arrays with index-based children. Leaf
//! values are already scaled by the training pipeline's learning rate; the
//! ensemble margin is the base score plus the sum of per-tree leaf values,
//! squashed through the sigmoid.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::error::{InferenceError, Result};
use crate::estimator::sigmoid;

/// A node in a decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Internal split: rows with `row[feature] < threshold` go left.
    Split {
        /// Feature index into the encoded row.
        feature: usize,
        /// Split threshold.
        threshold: f64,
        /// Node index of the left child.
        left: usize,
        /// Node index of the right child.
        right: usize,
    },
    /// Terminal leaf contributing `value` to the margin.
    Leaf {
        /// Leaf contribution, pre-scaled by the learning rate.
        value: f64,
    },
}

/// A single decision tree as a flat node array rooted at index 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    /// Tree nodes; child references index into this array.
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Walk the tree for one row and return the leaf value.
    ///
    /// # Errors
    ///
    /// Returns a prediction error on an empty tree, an out-of-bounds child
    /// or feature index, or a walk longer than the node count (a cycle).
    pub fn leaf_value(&self, row: ArrayView1<'_, f64>) -> Result<f64> {
        if self.nodes.is_empty() {
            return Err(InferenceError::PredictionError(
                "tree has no nodes".to_string(),
            ));
        }

        let mut index = 0;
        // A well-formed tree visits each node at most once.
        for _ in 0..self.nodes.len() {
            match &self.nodes[index] {
                Node::Leaf { value } => return Ok(*value),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = *row.get(*feature).ok_or_else(|| {
                        InferenceError::PredictionError(format!(
                            "split references feature {feature}, row has {}",
                            row.len()
                        ))
                    })?;
                    index = if value < *threshold { *left } else { *right };
                    if index >= self.nodes.len() {
                        return Err(InferenceError::PredictionError(format!(
                            "child index {index} out of bounds"
                        )));
                    }
                }
            }
        }

        Err(InferenceError::PredictionError(
            "tree walk did not reach a leaf".to_string(),
        ))
    }
}

/// Gradient-boosted tree ensemble parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoosting {
    /// Margin offset added before the tree contributions.
    #[serde(default)]
    pub base_score: f64,
    /// The boosted trees.
    pub trees: Vec<Tree>,
}

impl GradientBoosting {
    /// Positive-class probability for an encoded row.
    ///
    /// # Errors
    ///
    /// Returns a prediction error if any tree is malformed for this row.
    pub fn predict_proba(&self, row: ArrayView1<'_, f64>) -> Result<f64> {
        let mut margin = self.base_score;
        for tree in &self.trees {
            margin += tree.leaf_value(row)?;
        }
        Ok(sigmoid(margin))
    }

    /// Number of trees in the ensemble.
    #[must_use]
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }
}
