use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;
use crate::enums::overall_status::OverallStatus;
use crate::structs::metric_verdict::MetricVerdict;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub timestamp: String,
    pub overall_status: OverallStatus,
    pub total_requests: u64,
    pub max_vus: u64,
    /// Seconds.
    pub test_duration: f64,
    pub data_received: u64,
    pub data_sent: u64,
    #[serde(serialize_with = "serialize_verdicts")]
    pub results: Vec<MetricVerdict>,
}

impl RunSummary {
    pub fn verdict(&self, name: &str) -> Option<&MetricVerdict> {
        self.results.iter().find(|verdict| verdict.name == name)
    }

    pub fn failed_metrics(&self) -> impl Iterator<Item = &MetricVerdict> {
        self.results.iter().filter(|verdict| !verdict.passed)
    }
}

// Emits `results` as a name-keyed object while keeping policy order.
fn serialize_verdicts<S: Serializer>(verdicts: &[MetricVerdict], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(verdicts.len()))?;
    for verdict in verdicts {
        map.serialize_entry(&verdict.name, verdict)?;
    }
    map.end()
}
