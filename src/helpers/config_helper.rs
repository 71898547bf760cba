use crate::config::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_PERFORMANCE_JSON, DEFAULT_PERFORMANCE_REPORT, DEFAULT_REPORT_DETAIL_ALERTS,
    DEFAULT_SECURITY_JSON, DEFAULT_SECURITY_REPORT,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_performance_report() -> String {
        DEFAULT_PERFORMANCE_REPORT.to_string()
    }

    pub fn default_performance_json() -> String {
        DEFAULT_PERFORMANCE_JSON.to_string()
    }

    pub fn default_security_report() -> String {
        DEFAULT_SECURITY_REPORT.to_string()
    }

    pub fn default_security_json() -> String {
        DEFAULT_SECURITY_JSON.to_string()
    }

    pub fn default_verbose() -> bool {
        false
    }

    pub fn default_fail_on_high() -> bool {
        false
    }

    pub fn default_report_detail_limit() -> usize {
        DEFAULT_REPORT_DETAIL_ALERTS
    }

    pub fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_string()
    }
}
