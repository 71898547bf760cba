use crate::config::constants::REPORT_TEXT_CLIP_CHARS;
use crate::enums::risk_level::RiskLevel;
use crate::helpers::format_helper::clip;
use crate::structs::alert_record::AlertRecord;
use crate::structs::security_summary::SecuritySummary;

const BEST_PRACTICES: &[&str] = &[
    "**Scan regularly**: run a security scan before every release",
    "**Keep dependencies current**: update third-party libraries and frameworks",
    "**Validate input**: strictly validate all user input",
    "**Access control**: apply the principle of least privilege",
    "**Security headers**: configure the appropriate HTTP security headers",
    "**Monitor logs**: watch for abnormal access and attack attempts",
];

pub struct SecurityReport;

impl SecurityReport {

    /// `detail_limit` caps how many ranked alerts get a detail section.
    pub fn render(summary: &SecuritySummary, detail_limit: usize) -> String {
        let mut report = String::new();

        report.push_str("# Security Test Report\n\n");
        report.push_str(&format!("**Test time**: {}\n", summary.timestamp));
        report.push_str(&format!("**Overall status**: {}\n\n", Self::status_line(summary)));

        report.push_str("## Scan Overview\n\n");
        report.push_str(&format!("- **Total alerts**: {}\n", summary.total_alerts));
        for level in RiskLevel::ALL {
            let count = summary.risk_counts.get(level);
            if level == RiskLevel::Unknown && count == 0 {
                continue;
            }
            report.push_str(&format!("- **{}**: {} {}\n", level.label(), count, level.emoji()));
        }

        report.push_str("\n## Risk Distribution\n\n");
        report.push_str("| Risk level | Count | Status |\n");
        report.push_str("|------------|-------|--------|\n");
        for level in RiskLevel::ALL {
            let count = summary.risk_counts.get(level);
            report.push_str(&format!(
                "| {} {} | {} | {} |\n",
                level.emoji(),
                level.label(),
                count,
                Self::triage(level, count)
            ));
        }

        report.push_str("\n## Scan Targets\n\n");
        for target in &summary.scan_info {
            report.push_str(&format!("- **{}**: {} ({})\n", target.name, target.url(), target.source_file));
        }

        if !summary.warnings.is_empty() {
            report.push_str("\n## Skipped Files\n\n");
            for warning in &summary.warnings {
                report.push_str(&format!("- `{}`: {}\n", warning.path, warning.message()));
            }
        }

        if !summary.alerts.is_empty() {
            report.push_str("\n## Top Security Issues\n\n");
            for (i, alert) in summary.alerts.iter().take(detail_limit).enumerate() {
                report.push_str(&Self::alert_section(i + 1, alert));
            }
        }

        report.push_str("\n## Recommendations\n\n");
        if summary.high_risk_count > 0 {
            report.push_str("- 🚨 **Fix high risk vulnerabilities now**: high risk issues were found and must be fixed immediately\n");
        }
        if summary.medium_risk_count > 0 {
            report.push_str("- ⚠️ **Fix medium risk vulnerabilities**: schedule fixes for the next release\n");
        }
        if summary.low_risk_count > 0 {
            report.push_str("- ℹ️ **Consider low risk vulnerabilities**: address them in a later release\n");
        }
        if summary.total_alerts == 0 {
            report.push_str("- ✅ **Security posture looks good**: no notable vulnerabilities were found\n");
        }

        report.push_str("\n## Security Best Practices\n\n");
        for (i, practice) in BEST_PRACTICES.iter().enumerate() {
            report.push_str(&format!("{}. {}\n", i + 1, practice));
        }

        report
    }

    pub fn status_line(summary: &SecuritySummary) -> &'static str {
        if summary.overall_status.is_pass() {
            "✅ No high risk vulnerabilities found"
        } else {
            "❌ High risk vulnerabilities found"
        }
    }

    fn triage(level: RiskLevel, count: usize) -> &'static str {
        if count == 0 {
            return "✅";
        }
        match level {
            RiskLevel::High => "❌ Fix immediately",
            RiskLevel::Medium => "⚠️ Fix recommended",
            RiskLevel::Low => "ℹ️ Optional fix",
            RiskLevel::Informational => "ℹ️ For reference",
            RiskLevel::Unknown => "❓ Review manually",
        }
    }

    fn alert_section(index: usize, alert: &AlertRecord) -> String {
        let mut section = format!("### {}. {} {}\n\n", index, alert.risk_bucket().emoji(), alert.name);
        section.push_str(&format!("**Risk level**: {}\n", alert.risk_level));
        section.push_str(&format!("**Confidence**: {}\n", alert.confidence_level));
        section.push_str(&format!("**Description**: {}\n", clip(&alert.description, REPORT_TEXT_CLIP_CHARS)));
        if !alert.solution.is_empty() {
            section.push_str(&format!("**Solution**: {}\n", clip(&alert.solution, REPORT_TEXT_CLIP_CHARS)));
        }
        if !alert.instances.is_empty() {
            section.push_str(&format!("**Affected instances**: {}\n", alert.instances.len()));
        }
        section.push_str("\n---\n\n");
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::alert_aggregator::AlertAggregator;
    use crate::services::summary_builder::SummaryBuilder;
    use crate::structs::alert_batch::AlertBatch;
    use crate::structs::scan_target::ScanTarget;

    fn record(name: &str, level: &str, description: &str) -> AlertRecord {
        AlertRecord {
            source_file: "zap.json".to_string(),
            name: name.to_string(),
            raw_risk_description: format!("{} - Medium", level),
            confidence: "2".to_string(),
            risk_code: "3".to_string(),
            description: description.to_string(),
            solution: String::new(),
            reference: String::new(),
            instances: vec![serde_json::json!({"uri": "/"})],
            risk_level: level.to_string(),
            confidence_level: "Medium".to_string(),
        }
    }

    fn summary(alerts: Vec<AlertRecord>) -> SecuritySummary {
        let mut batch = AlertBatch::from_alerts(alerts);
        batch.scan_info.push(ScanTarget {
            source_file: "zap.json".to_string(),
            name: "api".to_string(),
            host: "api.local".to_string(),
            port: "8443".to_string(),
            ssl: true,
        });
        AlertAggregator::aggregate_with(batch, &SummaryBuilder::at("2024-05-01T10:00:00"))
    }

    #[test]
    fn renders_counts_targets_and_details() {
        let long = "x".repeat(250);
        let report = SecurityReport::render(&summary(vec![record("XSS", "Medium", &long), record("SQLi", "High", "bad")]), 10);

        assert!(report.contains("❌ High risk vulnerabilities found"));
        assert!(report.contains("- **Total alerts**: 2"));
        assert!(report.contains("| 🔴 High | 1 | ❌ Fix immediately |"));
        assert!(report.contains("https://api.local:8443"));
        assert!(report.find("### 1. 🔴 SQLi").unwrap() < report.find("### 2. 🟡 XSS").unwrap());
        assert!(report.contains(&format!("{}...", "x".repeat(200))));
        assert!(report.contains("**Affected instances**: 1"));
    }

    #[test]
    fn detail_limit_caps_sections() {
        let alerts = (0..5).map(|i| record(&format!("alert-{}", i), "Low", "d")).collect();
        let report = SecurityReport::render(&summary(alerts), 2);
        assert!(report.contains("alert-1"));
        assert!(!report.contains("alert-2"));
    }

    #[test]
    fn clean_scan_is_all_clear() {
        let report = SecurityReport::render(&summary(vec![]), 10);
        assert!(report.contains("✅ No high risk vulnerabilities found"));
        assert!(report.contains("Security posture looks good"));
        assert!(!report.contains("Top Security Issues"));
    }
}
