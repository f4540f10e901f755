// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Result types for classifier inference output.

use std::fmt;
use std::str::FromStr;

/// Timing information for inference operations (in milliseconds).
#[derive(Debug, Clone, Default)]
pub struct Speed {
    /// Time spent encoding the observation.
    pub preprocess: Option<f64>,
    /// Time spent in the estimator.
    pub inference: Option<f64>,
}

impl Speed {
    /// Create a new Speed instance with all timings.
    ///
    /// # Arguments
    ///
    /// * `preprocess` - Time in milliseconds.
    /// * `inference` - Time in milliseconds.
    #[must_use]
    pub const fn new(preprocess: f64, inference: f64) -> Self {
        Self {
            preprocess: Some(preprocess),
            inference: Some(inference),
        }
    }

    /// Get total inference time.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.preprocess.unwrap_or(0.0) + self.inference.unwrap_or(0.0)
    }
}

/// Binary attrition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// The positive (attrition) class.
    Yes,
    /// The negative class.
    No,
}

impl Label {
    /// Returns the literal printed on standard output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    /// Map a positive-class probability to a label at the given threshold.
    ///
    /// Probabilities greater than or equal to the threshold map to `Yes`.
    #[must_use]
    pub fn from_probability(probability: f64, threshold: f64) -> Self {
        if probability >= threshold {
            Self::Yes
        } else {
            Self::No
        }
    }

    /// Returns whether this is the positive class.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Label {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(LabelParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid label string.
#[derive(Debug, Clone)]
pub struct LabelParseError(String);

impl fmt::Display for LabelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid label '{}', expected one of: Yes, No", self.0)
    }
}

impl std::error::Error for LabelParseError {}

/// Main result container for one scored observation.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Positive-class probability reported by the estimator.
    pub probability: f64,
    /// Decision threshold the label was derived with.
    pub threshold: f64,
    /// The resulting label.
    pub label: Label,
    /// Inference timing information.
    pub speed: Speed,
}

impl Prediction {
    /// Create a prediction, deriving the label from probability and
    /// threshold.
    #[must_use]
    pub fn new(probability: f64, threshold: f64, speed: Speed) -> Self {
        Self {
            probability,
            threshold,
            label: Label::from_probability(probability, threshold),
            speed,
        }
    }

    /// Returns whether the positive class was predicted.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.label.is_positive()
    }
}
