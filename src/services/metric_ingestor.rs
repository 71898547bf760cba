use std::fs;
use std::path::Path;
use crate::config::constants::{
    AVG_RESPONSE_TIME, ERROR_RATE, K6_DATA_RECEIVED, K6_DATA_SENT, K6_HTTP_REQS, K6_HTTP_REQ_DURATION,
    K6_HTTP_REQ_FAILED, K6_VUS, P95_RESPONSE_TIME, P99_RESPONSE_TIME, THROUGHPUT,
};
use crate::errors::{VerdictError, VerdictResult};
use crate::structs::k6::k6_summary::K6Summary;
use crate::structs::metric_sample::MetricSample;
use crate::structs::metric_set::MetricSet;
use crate::structs::performance_run::PerformanceRun;
use crate::structs::run_totals::RunTotals;

pub struct MetricIngestor;

impl MetricIngestor {

    /// Missing and malformed files are errors here: there is nothing to
    /// evaluate without a result document.
    pub fn load(path: &Path) -> VerdictResult<PerformanceRun> {
        let content = fs::read_to_string(path).map_err(|e| VerdictError::from_read_error(path, &e))?;
        Self::parse(path, &content)
    }

    pub fn parse(path: &Path, content: &str) -> VerdictResult<PerformanceRun> {
        let summary: K6Summary = serde_json::from_str(content)
            .map_err(|e| VerdictError::from_json_error(path, &e))?;
        log::debug!("Parsed k6 summary {} with {} metrics", path.display(), summary.metrics.len());
        Ok(Self::from_summary(&summary))
    }

    /// Fields the summary does not report become absent samples or zero totals.
    pub fn from_summary(summary: &K6Summary) -> PerformanceRun {
        let metrics: MetricSet = [
            MetricSample::from_reported(AVG_RESPONSE_TIME, summary.field(K6_HTTP_REQ_DURATION, "avg")),
            MetricSample::from_reported(P95_RESPONSE_TIME, summary.field(K6_HTTP_REQ_DURATION, "p(95)")),
            MetricSample::from_reported(P99_RESPONSE_TIME, summary.field(K6_HTTP_REQ_DURATION, "p(99)")),
            MetricSample::from_reported(ERROR_RATE, summary.field(K6_HTTP_REQ_FAILED, "rate").map(|rate| rate * 100.0)),
            MetricSample::from_reported(THROUGHPUT, summary.field(K6_HTTP_REQS, "rate")),
        ]
        .into_iter()
        .collect();

        let totals = RunTotals {
            total_requests: to_count(summary.field(K6_HTTP_REQS, "count")),
            max_vus: to_count(summary.field(K6_VUS, "max")),
            test_duration_secs: summary.state.test_run_duration_ms.unwrap_or(0.0) / 1000.0,
            data_received: to_count(summary.field(K6_DATA_RECEIVED, "count")),
            data_sent: to_count(summary.field(K6_DATA_SENT, "count")),
        };

        PerformanceRun::new(metrics, totals)
    }
}

fn to_count(value: Option<f64>) -> u64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.round() as u64,
        _ => 0,
    }
}
