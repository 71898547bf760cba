use serde::{Deserialize, Serialize};
use crate::enums::risk_level::RiskLevel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCounts {
    #[serde(rename = "High")]
    pub high: usize,
    #[serde(rename = "Medium")]
    pub medium: usize,
    #[serde(rename = "Low")]
    pub low: usize,
    #[serde(rename = "Informational")]
    pub informational: usize,
    #[serde(rename = "Unknown")]
    pub unknown: usize,
}

impl RiskCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
            RiskLevel::Informational => self.informational += 1,
            RiskLevel::Unknown => self.unknown += 1,
        }
    }

    pub fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
            RiskLevel::Informational => self.informational,
            RiskLevel::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low + self.informational + self.unknown
    }
}
