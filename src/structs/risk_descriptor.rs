use serde::{Deserialize, Serialize};

/// Decoded form of a ZAP `riskdesc` such as `"High - Medium"`.
/// The risk text is kept verbatim and is not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDescriptor {
    pub risk_level: String,
    pub confidence_level: String,
}
