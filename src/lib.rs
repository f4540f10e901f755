// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! # Attrition Inference Library
//!
//! Inference shim for a pre-trained employee attrition classifier: encode a
//! fixed-order row of 14 feature values, load the trained artifact from
//! disk, and map the positive-class probability to a `Yes`/`No` label at a
//! fixed decision threshold.
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use attrition_inference::AttritionModel;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load model - metadata (features, classes) is validated automatically
//!     let model = AttritionModel::load("attrition_model.json")?;
//!
//!     // Score one observation, tokens in schema order
//!     let tokens = ["5000", "Yes", "35", "10", "800", "5", "14000",
//!                   "60", "12", "1", "3", "15", "4", "2"];
//!     let prediction = model.predict_tokens(&tokens)?;
//!
//!     println!("{}", prediction.label); // "Yes" or "No"
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! The `predict_attrition` binary takes the 14 feature values as positional
//! arguments, in schema order:
//!
//! ```bash
//! # Score one employee record
//! predict_attrition 5000 Yes 35 10 800 5 14000 60 12 1 3 15 4 2
//!
//! # With a custom artifact path
//! predict_attrition --model models/attrition_model.json 5000 No 35 10 800 5 14000 60 12 1 3 15 4 2
//!
//! # With diagnostics on stderr
//! predict_attrition --verbose 5000 Yes 35 10 800 5 14000 60 12 1 3 15 4 2
//! ```
//!
//! The label is the sole output on standard output; diagnostics and errors
//! go to standard error. An argument count other than 14 exits with code 1
//! before any model loading.
//!
//! ## Feature Schema
//!
//! The classifier was trained on 14 columns in a fixed order:
//! MonthlyIncome, OverTime, Age, TotalWorkingYears, DailyRate,
//! YearsAtCompany, MonthlyRate, HourlyRate, DistanceFromHome,
//! StockOptionLevel, YearsWithCurrManager, PercentSalaryHike,
//! YearsInCurrentRole, NumCompaniesWorked. OverTime is yes/no; the rest are
//! numeric. See [`schema::FEATURES`].
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | Core [`AttritionModel`] for loading artifacts and scoring |
//! | [`schema`] | The fixed 14-feature schema |
//! | [`preprocessing`] | Token encoding into an [`Observation`] |
//! | [`estimator`] | Logistic regression and gradient-boosted tree estimators |
//! | [`metadata`] | Artifact metadata parsing and schema validation |
//! | [`inference`] | [`InferenceConfig`] with the decision threshold |
//! | [`results`] | Output types ([`Prediction`], [`Label`], [`Speed`]) |
//! | [`error`] | Error types ([`InferenceError`], [`Result`]) |

// Modules
pub mod cli;
pub mod error;
pub mod estimator;
pub mod inference;
pub mod metadata;
pub mod model;
pub mod preprocessing;
pub mod results;
pub mod schema;

// Re-export main types for convenience
pub use error::{InferenceError, Result};
pub use inference::{DEFAULT_MODEL, DEFAULT_THRESHOLD, InferenceConfig};
pub use metadata::ModelMetadata;
pub use model::AttritionModel;
pub use preprocessing::Observation;
pub use results::{Label, Prediction, Speed};
pub use schema::{FEATURE_COUNT, FEATURES, FeatureKind, FeatureSpec};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
