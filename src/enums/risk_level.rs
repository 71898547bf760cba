use std::fmt;
use serde::{Deserialize, Serialize};

/// Severity bucket of a security alert. The rank only orders alerts, it is
/// never summed or scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    Informational,
    Unknown,
}

impl RiskLevel {
    /// Known levels in descending severity, followed by the catch-all bucket.
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
        RiskLevel::Informational,
        RiskLevel::Unknown,
    ];

    /// Exact, case-sensitive match against the four known level names.
    /// Anything else, including `"high"` or `"Critical"`, is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "High" => RiskLevel::High,
            "Medium" => RiskLevel::Medium,
            "Low" => RiskLevel::Low,
            "Informational" => RiskLevel::Informational,
            _ => RiskLevel::Unknown,
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            RiskLevel::High => 4,
            RiskLevel::Medium => 3,
            RiskLevel::Low => 2,
            RiskLevel::Informational => 1,
            RiskLevel::Unknown => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
            RiskLevel::Informational => "Informational",
            RiskLevel::Unknown => "Unknown",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLevel::High => "🔴",
            RiskLevel::Medium => "🟡",
            RiskLevel::Low => "🟢",
            RiskLevel::Informational => "🔵",
            RiskLevel::Unknown => "❓",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_severity() {
        let ranks: Vec<u8> = RiskLevel::ALL.iter().map(RiskLevel::rank).collect();
        assert_eq!(ranks, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn label_match_is_case_sensitive() {
        assert_eq!(RiskLevel::from_label("High"), RiskLevel::High);
        assert_eq!(RiskLevel::from_label("high"), RiskLevel::Unknown);
        assert_eq!(RiskLevel::from_label("Informational"), RiskLevel::Informational);
        assert_eq!(RiskLevel::from_label("Critical"), RiskLevel::Unknown);
        assert_eq!(RiskLevel::from_label(""), RiskLevel::Unknown);
    }
}
