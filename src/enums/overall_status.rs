use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallStatus {
    #[serde(rename = "pass")]
    Pass,
    #[serde(rename = "fail")]
    Fail,
}

impl OverallStatus {
    pub fn from_passed(passed: bool) -> Self {
        if passed { OverallStatus::Pass } else { OverallStatus::Fail }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, OverallStatus::Pass)
    }

    pub fn badge(&self) -> &'static str {
        match self {
            OverallStatus::Pass => "✅ PASS",
            OverallStatus::Fail => "❌ FAIL",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverallStatus::Pass => f.write_str("pass"),
            OverallStatus::Fail => f.write_str("fail"),
        }
    }
}
