pub const CONFIG_PATH_ENV: &str = "RUNVERDICT_CONFIG";
pub const CONFIG_DIR_NAME: &str = "runverdict";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_PERFORMANCE_REPORT: &str = "performance-report.md";
pub const DEFAULT_PERFORMANCE_JSON: &str = "performance-summary.json";
pub const DEFAULT_SECURITY_REPORT: &str = "security-report.md";
pub const DEFAULT_SECURITY_JSON: &str = "security-summary.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

// Policy metric names, in report order.
pub const AVG_RESPONSE_TIME: &str = "avg_response_time";
pub const P95_RESPONSE_TIME: &str = "p95_response_time";
pub const P99_RESPONSE_TIME: &str = "p99_response_time";
pub const ERROR_RATE: &str = "error_rate";
pub const THROUGHPUT: &str = "throughput";

// k6 summary keys
pub const K6_HTTP_REQ_DURATION: &str = "http_req_duration";
pub const K6_HTTP_REQ_FAILED: &str = "http_req_failed";
pub const K6_HTTP_REQS: &str = "http_reqs";
pub const K6_VUS: &str = "vus";
pub const K6_DATA_RECEIVED: &str = "data_received";
pub const K6_DATA_SENT: &str = "data_sent";

/// Separator between risk and confidence in a ZAP `riskdesc`.
pub const RISK_DESCRIPTION_SEPARATOR: &str = " - ";
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Ranked alerts kept in a security summary; counts always cover every alert.
pub const MAX_REPORTED_ALERTS: usize = 20;
pub const DEFAULT_REPORT_DETAIL_ALERTS: usize = 10;
pub const REPORT_TEXT_CLIP_CHARS: usize = 200;

pub const EXIT_PASS: i32 = 0;
pub const EXIT_FAIL: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
