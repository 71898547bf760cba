use crate::errors::VerdictError;
use crate::structs::alert_record::AlertRecord;
use crate::structs::scan_target::ScanTarget;

/// What one scan file contributed to a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Loaded {
        path: String,
        alerts: Vec<AlertRecord>,
        targets: Vec<ScanTarget>,
    },
    Skipped {
        path: String,
        reason: VerdictError,
    },
}
