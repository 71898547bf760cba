use crate::config::constants::MAX_REPORTED_ALERTS;
use crate::services::summary_builder::SummaryBuilder;
use crate::structs::alert_batch::AlertBatch;
use crate::structs::alert_record::AlertRecord;
use crate::structs::risk_counts::RiskCounts;
use crate::structs::security_summary::SecuritySummary;

pub struct AlertAggregator;

impl AlertAggregator {

    pub fn aggregate(batch: AlertBatch) -> SecuritySummary {
        Self::aggregate_with(batch, &SummaryBuilder::now())
    }

    /// Counts cover every alert; only the detail list is truncated.
    pub fn aggregate_with(batch: AlertBatch, builder: &SummaryBuilder) -> SecuritySummary {
        let counts = Self::count(&batch.alerts);
        let mut ranked = Self::rank(batch.alerts);
        ranked.truncate(MAX_REPORTED_ALERTS);

        log::debug!(
            "Aggregated {} alerts (High {}, Medium {}, Low {}, Informational {}, Unknown {})",
            counts.total(),
            counts.high,
            counts.medium,
            counts.low,
            counts.informational,
            counts.unknown
        );

        builder.security(counts, ranked, batch.scan_info, batch.warnings)
    }

    /// Unrecognized risk strings land in the Unknown bucket.
    pub fn count(alerts: &[AlertRecord]) -> RiskCounts {
        let mut counts = RiskCounts::new();
        for alert in alerts {
            counts.record(alert.risk_bucket());
        }
        counts
    }

    /// Highest severity first. `sort_by` is stable, so equal ranks keep
    /// their input order.
    pub fn rank(mut alerts: Vec<AlertRecord>) -> Vec<AlertRecord> {
        alerts.sort_by(|a, b| b.rank().cmp(&a.rank()));
        alerts
    }
}
