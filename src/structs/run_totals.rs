use serde::{Deserialize, Serialize};

/// Run-wide figures reported alongside the verdicts. They are not judged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunTotals {
    pub total_requests: u64,
    pub max_vus: u64,
    pub test_duration_secs: f64,
    pub data_received: u64,
    pub data_sent: u64,
}
