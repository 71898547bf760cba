use serde::{Deserialize, Serialize};
use crate::enums::threshold_direction::ThresholdDirection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricVerdict {
    #[serde(skip)]
    pub name: String,
    /// Rounded to two decimals.
    pub value: f64,
    #[serde(rename = "threshold")]
    pub limit: f64,
    pub unit: String,
    pub direction: ThresholdDirection,
    pub passed: bool,
}
