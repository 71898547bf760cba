use serde::Serialize;
use crate::enums::overall_status::OverallStatus;
use crate::structs::alert_record::AlertRecord;
use crate::structs::ingest_warning::IngestWarning;
use crate::structs::risk_counts::RiskCounts;
use crate::structs::scan_target::ScanTarget;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecuritySummary {
    pub timestamp: String,
    pub total_alerts: usize,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,
    pub info_risk_count: usize,
    pub unknown_risk_count: usize,
    pub risk_counts: RiskCounts,
    pub scan_info: Vec<ScanTarget>,
    /// Highest-ranked alerts, truncated.
    pub alerts: Vec<AlertRecord>,
    pub overall_status: OverallStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<IngestWarning>,
}
