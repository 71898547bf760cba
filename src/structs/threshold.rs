use serde::{Deserialize, Serialize};
use crate::enums::threshold_direction::ThresholdDirection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub limit: f64,
    pub unit: String,
    pub direction: ThresholdDirection,
}

impl Threshold {
    pub fn at_most(limit: f64, unit: &str) -> Self {
        Self { limit, unit: unit.to_string(), direction: ThresholdDirection::AtMost }
    }

    pub fn at_least(limit: f64, unit: &str) -> Self {
        Self { limit, unit: unit.to_string(), direction: ThresholdDirection::AtLeast }
    }

    pub fn admits(&self, value: f64) -> bool {
        self.direction.admits(value, self.limit)
    }
}
