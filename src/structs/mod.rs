pub mod alert_batch;
pub mod alert_record;
pub mod cli;
pub mod config;
pub mod ingest_warning;
pub mod k6;
pub mod metric_sample;
pub mod metric_set;
pub mod metric_verdict;
pub mod performance_run;
pub mod risk_counts;
pub mod risk_descriptor;
pub mod run_summary;
pub mod run_totals;
pub mod scan_target;
pub mod security_summary;
pub mod threshold;
pub mod threshold_policy;
pub mod zap;
