use std::collections::HashMap;
use serde::Deserialize;
use serde_json::Value;

/// One entry of the k6 `metrics` object, e.g. `{"avg": 12.3, "p(95)": 40.1}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct K6Metric {
    fields: HashMap<String, Value>,
}

impl K6Metric {
    /// Looks at the metric itself first, then at the nested `values` object
    /// that `handleSummary` output uses.
    pub fn field(&self, name: &str) -> Option<f64> {
        self.fields
            .get(name)
            .and_then(Value::as_f64)
            .or_else(|| {
                self.fields
                    .get("values")
                    .and_then(|values| values.get(name))
                    .and_then(Value::as_f64)
            })
    }
}
