use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdDirection {
    /// Lower is better: passes when `value <= limit`.
    #[serde(rename = "at_most")]
    AtMost,
    /// Higher is better: passes when `value >= limit`.
    #[serde(rename = "at_least")]
    AtLeast,
}

impl ThresholdDirection {
    /// Both bounds are inclusive.
    pub fn admits(&self, value: f64, limit: f64) -> bool {
        match self {
            ThresholdDirection::AtMost => value <= limit,
            ThresholdDirection::AtLeast => value >= limit,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ThresholdDirection::AtMost => "≤",
            ThresholdDirection::AtLeast => "≥",
        }
    }
}
