// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! The fixed feature schema the classifier was trained on.
//!
//! This module defines the ordered list of 14 named features the model
//! expects, along with their kinds. The order is load-bearing: the encoded
//! observation row and the artifact's embedded feature list must both match
//! it exactly.

use std::fmt;
use std::str::FromStr;

/// The kind of value a feature carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    /// A numeric feature, parsed as a finite float.
    Numeric,
    /// A yes/no categorical feature, encoded as 1.0/0.0.
    Categorical,
}

impl FeatureKind {
    /// Returns the string representation of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeatureKind {
    type Err = FeatureKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numeric" | "number" => Ok(Self::Numeric),
            "categorical" | "category" => Ok(Self::Categorical),
            _ => Err(FeatureKindParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid feature kind string.
#[derive(Debug, Clone)]
pub struct FeatureKindParseError(String);

impl fmt::Display for FeatureKindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid feature kind '{}', expected one of: numeric, categorical",
            self.0
        )
    }
}

impl std::error::Error for FeatureKindParseError {}

/// A single named feature in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    /// Column name the model was trained with.
    pub name: &'static str,
    /// Value kind expected for this column.
    pub kind: FeatureKind,
}

impl FeatureSpec {
    const fn numeric(name: &'static str) -> Self {
        Self {
            name,
            kind: FeatureKind::Numeric,
        }
    }

    const fn categorical(name: &'static str) -> Self {
        Self {
            name,
            kind: FeatureKind::Categorical,
        }
    }
}

/// The ordered feature schema. The classifier scores rows in exactly this
/// column order.
pub const FEATURES: [FeatureSpec; 14] = [
    FeatureSpec::numeric("MonthlyIncome"),
    FeatureSpec::categorical("OverTime"),
    FeatureSpec::numeric("Age"),
    FeatureSpec::numeric("TotalWorkingYears"),
    FeatureSpec::numeric("DailyRate"),
    FeatureSpec::numeric("YearsAtCompany"),
    FeatureSpec::numeric("MonthlyRate"),
    FeatureSpec::numeric("HourlyRate"),
    FeatureSpec::numeric("DistanceFromHome"),
    FeatureSpec::numeric("StockOptionLevel"),
    FeatureSpec::numeric("YearsWithCurrManager"),
    FeatureSpec::numeric("PercentSalaryHike"),
    FeatureSpec::numeric("YearsInCurrentRole"),
    FeatureSpec::numeric("NumCompaniesWorked"),
];

/// Number of features in the schema.
pub const FEATURE_COUNT: usize = FEATURES.len();

/// Get the schema's feature names in order.
#[must_use]
pub fn feature_names() -> Vec<&'static str> {
    FEATURES.iter().map(|spec| spec.name).collect()
}

/// Get the position of a feature by name, if present.
#[must_use]
pub fn position(name: &str) -> Option<usize> {
    FEATURES.iter().position(|spec| spec.name == name)
}
