use serde::Deserialize;
use crate::helpers::serde_helper::number_or_none;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct K6State {
    #[serde(default, rename = "testRunDurationMs", deserialize_with = "number_or_none")]
    pub test_run_duration_ms: Option<f64>,
}
