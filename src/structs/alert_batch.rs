use crate::structs::alert_record::AlertRecord;
use crate::structs::ingest_warning::IngestWarning;
use crate::structs::scan_target::ScanTarget;

/// Alerts from every readable scan file, in file order then alert order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertBatch {
    pub alerts: Vec<AlertRecord>,
    pub scan_info: Vec<ScanTarget>,
    pub warnings: Vec<IngestWarning>,
}

impl AlertBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_alerts(alerts: Vec<AlertRecord>) -> Self {
        Self { alerts, ..Self::default() }
    }
}
