use crate::config::constants::{RISK_DESCRIPTION_SEPARATOR, UNKNOWN_LABEL};
use crate::structs::risk_descriptor::RiskDescriptor;

pub struct RiskClassifier;

impl RiskClassifier {
    /// Splits a ZAP `riskdesc` at the first `" - "`. Without the separator
    /// both halves are `"Unknown"`. The risk half is not checked against
    /// the known levels; the aggregator buckets unrecognized ones.
    pub fn classify(raw_risk_description: &str) -> RiskDescriptor {
        match raw_risk_description.split_once(RISK_DESCRIPTION_SEPARATOR) {
            Some((risk, confidence)) => RiskDescriptor {
                risk_level: risk.to_string(),
                confidence_level: confidence.to_string(),
            },
            None => RiskDescriptor {
                risk_level: UNKNOWN_LABEL.to_string(),
                confidence_level: UNKNOWN_LABEL.to_string(),
            },
        }
    }
}
