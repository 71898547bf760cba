use std::collections::HashMap;
use serde::Deserialize;
use crate::helpers::serde_helper::default_on_null;
use crate::structs::k6::k6_metric::K6Metric;
use crate::structs::k6::k6_state::K6State;

/// Top level of a k6 `--summary-export` (or `handleSummary`) document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct K6Summary {
    #[serde(default, deserialize_with = "default_on_null")]
    pub metrics: HashMap<String, K6Metric>,

    #[serde(default, deserialize_with = "default_on_null")]
    pub state: K6State,
}

impl K6Summary {
    /// A sub-field of a metric, `None` when either is missing or not numeric.
    pub fn field(&self, metric: &str, field: &str) -> Option<f64> {
        self.metrics.get(metric).and_then(|m| m.field(field))
    }
}
