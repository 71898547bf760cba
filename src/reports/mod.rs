pub mod performance_report;
pub mod security_report;
