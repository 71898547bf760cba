use crate::structs::security_summary::SecuritySummary;

/// What decides the process exit code of a security run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTrigger {
    OverallStatus,
    HighRiskCount,
}

impl ExitTrigger {
    pub fn from_fail_on_high(fail_on_high: bool) -> Self {
        if fail_on_high { ExitTrigger::HighRiskCount } else { ExitTrigger::OverallStatus }
    }

    pub fn should_fail(&self, summary: &SecuritySummary) -> bool {
        match self {
            ExitTrigger::OverallStatus => !summary.overall_status.is_pass(),
            ExitTrigger::HighRiskCount => summary.high_risk_count > 0,
        }
    }
}
