use serde::Deserialize;
use crate::helpers::serde_helper::default_on_null;
use crate::structs::zap::zap_site::ZapSite;

/// Top level of an OWASP ZAP JSON report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZapReport {
    #[serde(default, deserialize_with = "default_on_null")]
    pub site: Vec<ZapSite>,
}
