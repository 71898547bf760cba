use crate::config::constants::{AVG_RESPONSE_TIME, ERROR_RATE, P95_RESPONSE_TIME, P99_RESPONSE_TIME, THROUGHPUT};
use crate::helpers::format_helper::thousands;
use crate::structs::metric_verdict::MetricVerdict;
use crate::structs::run_summary::RunSummary;

pub struct PerformanceReport;

impl PerformanceReport {

    pub fn render(summary: &RunSummary) -> String {
        let mut report = String::new();

        report.push_str("# Performance Test Report\n\n");
        report.push_str(&format!("**Test time**: {}\n", summary.timestamp));
        report.push_str(&format!("**Overall status**: {}\n\n", Self::status_line(summary)));

        report.push_str("## Overview\n\n");
        report.push_str(&format!("- **Total requests**: {}\n", thousands(summary.total_requests)));
        report.push_str(&format!("- **Max virtual users**: {}\n", summary.max_vus));
        report.push_str(&format!("- **Test duration**: {:.1} s\n", summary.test_duration));
        report.push_str(&format!("- **Data received**: {} bytes\n", thousands(summary.data_received)));
        report.push_str(&format!("- **Data sent**: {} bytes\n\n", thousands(summary.data_sent)));

        report.push_str("## Metrics\n\n");
        report.push_str("| Metric | Value | Threshold | Status |\n");
        report.push_str("|--------|-------|-----------|--------|\n");
        for verdict in &summary.results {
            report.push_str(&Self::metric_row(verdict));
        }

        report.push_str("\n## Recommendations\n\n");
        for verdict in summary.failed_metrics() {
            if let Some(advice) = Self::recommendation(&verdict.name) {
                report.push_str(&format!("- ⚠️ {}\n", advice));
            }
        }
        if summary.overall_status.is_pass() {
            report.push_str("- ✅ All performance metrics are within their thresholds\n");
        }

        report
    }

    pub fn status_line(summary: &RunSummary) -> &'static str {
        if summary.overall_status.is_pass() { "✅ Passed" } else { "❌ Failed" }
    }

    fn metric_row(verdict: &MetricVerdict) -> String {
        let status = if verdict.passed { "✅ PASS" } else { "❌ FAIL" };
        format!(
            "| {} | {} {} | {} {} {} | {} |\n",
            Self::label(&verdict.name),
            verdict.value,
            verdict.unit,
            verdict.direction.symbol(),
            verdict.limit,
            verdict.unit,
            status
        )
    }

    pub fn label(metric: &str) -> &str {
        match metric {
            AVG_RESPONSE_TIME => "Average response time",
            P95_RESPONSE_TIME => "95th percentile response time",
            P99_RESPONSE_TIME => "99th percentile response time",
            ERROR_RATE => "Error rate",
            THROUGHPUT => "Throughput",
            other => other,
        }
    }

    fn recommendation(metric: &str) -> Option<&'static str> {
        match metric {
            AVG_RESPONSE_TIME => Some("Average response time is high; review database queries and caching"),
            P95_RESPONSE_TIME => Some("95th percentile response time is high; there may be a bottleneck"),
            P99_RESPONSE_TIME => Some("99th percentile response time is high; look for slow outlier requests"),
            ERROR_RATE => Some("Error rate is high; check application logs and error handling"),
            THROUGHPUT => Some("Throughput is low; tune application performance and resource allocation"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::summary_builder::SummaryBuilder;
    use crate::services::threshold_evaluator::ThresholdEvaluator;
    use crate::structs::metric_set::MetricSet;
    use crate::structs::performance_run::PerformanceRun;
    use crate::structs::run_totals::RunTotals;
    use crate::structs::threshold_policy::ThresholdPolicy;

    fn summary(samples: &[(&'static str, f64)]) -> RunSummary {
        let metrics: MetricSet = samples.iter().copied().collect();
        let totals = RunTotals { total_requests: 12345, max_vus: 20, test_duration_secs: 30.25, data_received: 1000, data_sent: 10 };
        ThresholdEvaluator::evaluate_with(&PerformanceRun::new(metrics, totals), ThresholdPolicy::standard(), &SummaryBuilder::at("2024-05-01T10:00:00"))
    }

    #[test]
    fn renders_every_field() {
        let report = PerformanceReport::render(&summary(&[(AVG_RESPONSE_TIME, 123.456), (THROUGHPUT, 150.0)]));
        assert!(report.contains("2024-05-01T10:00:00"));
        assert!(report.contains("12,345"));
        assert!(report.contains("30.2 s") || report.contains("30.3 s"));
        assert!(report.contains("1,000 bytes"));
        assert!(report.contains("| Average response time | 123.46 ms | ≤ 500 ms | ✅ PASS |"));
        assert!(report.contains("| Throughput | 150 req/s | ≥ 100 req/s | ✅ PASS |"));
        assert!(report.contains("All performance metrics are within their thresholds"));
    }

    #[test]
    fn failing_metrics_get_recommendations() {
        let report = PerformanceReport::render(&summary(&[(ERROR_RATE, 5.0), (THROUGHPUT, 10.0)]));
        assert!(report.contains("❌ Failed"));
        assert!(report.contains("Error rate is high"));
        assert!(report.contains("Throughput is low"));
        assert!(!report.contains("Average response time is high"));
        assert!(!report.contains("All performance metrics"));
    }
}
