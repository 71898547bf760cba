use chrono::{Local, SecondsFormat};
use crate::enums::overall_status::OverallStatus;
use crate::structs::alert_record::AlertRecord;
use crate::structs::ingest_warning::IngestWarning;
use crate::structs::metric_verdict::MetricVerdict;
use crate::structs::risk_counts::RiskCounts;
use crate::structs::run_summary::RunSummary;
use crate::structs::run_totals::RunTotals;
use crate::structs::scan_target::ScanTarget;
use crate::structs::security_summary::SecuritySummary;

/// Stamps and assembles the verdict objects handed to report writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryBuilder {
    timestamp: String,
}

impl SummaryBuilder {
    pub fn now() -> Self {
        Self::at(&Local::now().to_rfc3339_opts(SecondsFormat::Micros, false))
    }

    pub fn at(timestamp: &str) -> Self {
        Self { timestamp: timestamp.to_string() }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The run passes only when every verdict passed.
    pub fn performance(&self, totals: &RunTotals, results: Vec<MetricVerdict>) -> RunSummary {
        let overall_status = OverallStatus::from_passed(results.iter().all(|verdict| verdict.passed));

        RunSummary {
            timestamp: self.timestamp.clone(),
            overall_status,
            total_requests: totals.total_requests,
            max_vus: totals.max_vus,
            test_duration: totals.test_duration_secs,
            data_received: totals.data_received,
            data_sent: totals.data_sent,
            results,
        }
    }

    /// Only High alerts fail a security run.
    pub fn security(
        &self,
        counts: RiskCounts,
        ranked_alerts: Vec<AlertRecord>,
        scan_info: Vec<ScanTarget>,
        warnings: Vec<IngestWarning>,
    ) -> SecuritySummary {
        SecuritySummary {
            timestamp: self.timestamp.clone(),
            total_alerts: counts.total(),
            high_risk_count: counts.high,
            medium_risk_count: counts.medium,
            low_risk_count: counts.low,
            info_risk_count: counts.informational,
            unknown_risk_count: counts.unknown,
            risk_counts: counts,
            scan_info,
            alerts: ranked_alerts,
            overall_status: OverallStatus::from_passed(counts.high == 0),
            warnings,
        }
    }
}
