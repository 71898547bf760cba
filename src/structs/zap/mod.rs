pub mod zap_alert;
pub mod zap_report;
pub mod zap_site;
