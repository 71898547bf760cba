use serde::{Deserialize, Serialize};

/// A named measurement taken from a test-run document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub name: String,
    pub value: f64,
}

impl MetricSample {
    /// Value carried by a metric the source document does not report.
    /// Absence is not an error.
    pub const ABSENT_VALUE: f64 = 0.0;

    pub fn new(name: &str, value: f64) -> Self {
        Self { name: name.to_string(), value }
    }

    pub fn absent(name: &str) -> Self {
        Self::new(name, Self::ABSENT_VALUE)
    }

    /// Uses the reported value when there is one, the absent default otherwise.
    pub fn from_reported(name: &str, value: Option<f64>) -> Self {
        match value {
            Some(value) => Self::new(name, value),
            None => Self::absent(name),
        }
    }
}
