use std::fs;
use std::path::{Path, PathBuf};
use crate::enums::file_outcome::FileOutcome;
use crate::errors::VerdictError;
use crate::services::risk_classifier::RiskClassifier;
use crate::structs::alert_batch::AlertBatch;
use crate::structs::alert_record::AlertRecord;
use crate::structs::ingest_warning::IngestWarning;
use crate::structs::scan_target::ScanTarget;
use crate::structs::zap::zap_alert::ZapAlert;
use crate::structs::zap::zap_report::ZapReport;

pub struct AlertIngestor;

impl AlertIngestor {

    /// Reads every scan file and concatenates their alerts in path order.
    /// Files that are missing or unparseable become warnings; they never stop
    /// the batch.
    pub fn ingest(paths: &[PathBuf]) -> AlertBatch {
        let outcomes = Self::read_all(paths);
        Self::reduce(outcomes)
    }

    #[cfg(feature = "parallel-processing")]
    fn read_all(paths: &[PathBuf]) -> Vec<FileOutcome> {
        use rayon::prelude::*;
        // Indexed collect keeps input order.
        paths.par_iter().map(|path| Self::read_file(path)).collect()
    }

    #[cfg(not(feature = "parallel-processing"))]
    fn read_all(paths: &[PathBuf]) -> Vec<FileOutcome> {
        paths.iter().map(|path| Self::read_file(path)).collect()
    }

    pub fn read_file(path: &Path) -> FileOutcome {
        let source = path.display().to_string();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                return FileOutcome::Skipped { path: source, reason: VerdictError::from_read_error(path, &e) };
            }
        };

        match serde_json::from_str::<ZapReport>(&content) {
            Ok(report) => {
                let (alerts, targets) = Self::extract(&source, report);
                FileOutcome::Loaded { path: source, alerts, targets }
            }
            Err(e) => FileOutcome::Skipped { path: source, reason: VerdictError::from_json_error(path, &e) },
        }
    }

    /// Flattens a parsed report into classified alert records plus one scan
    /// target per site. A report without sites or alerts yields nothing.
    pub fn extract(source: &str, report: ZapReport) -> (Vec<AlertRecord>, Vec<ScanTarget>) {
        let mut alerts = Vec::new();
        let mut targets = Vec::with_capacity(report.site.len());

        for site in report.site {
            targets.push(ScanTarget {
                source_file: source.to_string(),
                name: site.name,
                host: site.host,
                port: site.port,
                ssl: site.ssl,
            });
            alerts.extend(site.alerts.into_iter().map(|alert| Self::to_record(source, alert)));
        }

        (alerts, targets)
    }

    fn to_record(source: &str, alert: ZapAlert) -> AlertRecord {
        let descriptor = RiskClassifier::classify(&alert.riskdesc);
        AlertRecord {
            source_file: source.to_string(),
            name: alert.name,
            raw_risk_description: alert.riskdesc,
            confidence: alert.confidence,
            risk_code: alert.riskcode,
            description: alert.desc,
            solution: alert.solution,
            reference: alert.reference,
            instances: alert.instances,
            risk_level: descriptor.risk_level,
            confidence_level: descriptor.confidence_level,
        }
    }

    fn reduce(outcomes: Vec<FileOutcome>) -> AlertBatch {
        let mut batch = AlertBatch::new();

        for outcome in outcomes {
            match outcome {
                FileOutcome::Loaded { path, alerts, targets } => {
                    log::debug!("Loaded {} alerts from {}", alerts.len(), path);
                    batch.alerts.extend(alerts);
                    batch.scan_info.extend(targets);
                }
                FileOutcome::Skipped { path, reason } => {
                    log::warn!("⚠️ Skipping scan file {}: {}", path, reason);
                    batch.warnings.push(IngestWarning { path, reason });
                }
            }
        }

        batch
    }
}
