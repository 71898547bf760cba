use once_cell::sync::Lazy;
use crate::config::constants::{
    AVG_RESPONSE_TIME, ERROR_RATE, P95_RESPONSE_TIME, P99_RESPONSE_TIME, THROUGHPUT,
};
use crate::structs::threshold::Threshold;

static STANDARD_POLICY: Lazy<ThresholdPolicy> = Lazy::new(|| {
    ThresholdPolicy::new(vec![
        (AVG_RESPONSE_TIME.to_string(), Threshold::at_most(500.0, "ms")),
        (P95_RESPONSE_TIME.to_string(), Threshold::at_most(1000.0, "ms")),
        (P99_RESPONSE_TIME.to_string(), Threshold::at_most(2000.0, "ms")),
        (ERROR_RATE.to_string(), Threshold::at_most(1.0, "%")),
        (THROUGHPUT.to_string(), Threshold::at_least(100.0, "req/s")),
    ])
});

/// Metric name to limit mapping. Entry order is the order verdicts are
/// reported in.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdPolicy {
    entries: Vec<(String, Threshold)>,
}

impl ThresholdPolicy {
    pub fn new(entries: Vec<(String, Threshold)>) -> Self {
        Self { entries }
    }

    /// The process-wide policy every performance run is judged by.
    pub fn standard() -> &'static ThresholdPolicy {
        &STANDARD_POLICY
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Threshold)> {
        self.entries.iter().map(|(name, threshold)| (name.as_str(), threshold))
    }

    pub fn get(&self, name: &str) -> Option<&Threshold> {
        self.entries.iter().find(|(entry, _)| entry == name).map(|(_, threshold)| threshold)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
