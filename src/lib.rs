//! Pass/fail verdicts for load-test and security-scan artifacts.
//!
//! Two pipelines share one shape, ingest then evaluate then summarize:
//! k6 summaries are judged against a fixed [`ThresholdPolicy`], and OWASP ZAP
//! reports are classified, counted and ranked by risk. Both end in a
//! serializable summary that report writers and the CLI consume.
//!
//! [`ThresholdPolicy`]: structs::threshold_policy::ThresholdPolicy

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod reports;
pub mod services;
pub mod structs;
pub mod workers;
