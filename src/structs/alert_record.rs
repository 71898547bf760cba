use serde::{Deserialize, Serialize};
use crate::enums::risk_level::RiskLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    #[serde(rename = "file")]
    pub source_file: String,
    pub name: String,
    #[serde(rename = "riskdesc")]
    pub raw_risk_description: String,
    pub confidence: String,
    #[serde(rename = "riskcode")]
    pub risk_code: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub solution: String,
    pub reference: String,
    pub instances: Vec<serde_json::Value>,
    /// Raw classifier output; may be a string outside the known levels.
    pub risk_level: String,
    pub confidence_level: String,
}

impl AlertRecord {
    /// Bucket used for counting and ranking. The record's own `risk_level`
    /// is left untouched.
    pub fn risk_bucket(&self) -> RiskLevel {
        RiskLevel::from_label(&self.risk_level)
    }

    pub fn rank(&self) -> u8 {
        self.risk_bucket().rank()
    }
}
