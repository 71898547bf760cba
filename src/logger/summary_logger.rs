use std::path::Path;
use crate::reports::performance_report::PerformanceReport;
use crate::reports::security_report::SecurityReport;
use crate::structs::run_summary::RunSummary;
use crate::structs::security_summary::SecuritySummary;

pub struct SummaryLogger {}

impl SummaryLogger {

    pub fn print_performance_summary(summary: &RunSummary, report_path: &Path, json_path: &Path) {
        println!("📊 Performance analysis complete:");
        println!("   Overall status: {}", PerformanceReport::status_line(summary));
        for verdict in &summary.results {
            let marker = if verdict.passed { "✅" } else { "❌" };
            println!(
                "   {} {}: {} {} ({} {} {})",
                marker,
                PerformanceReport::label(&verdict.name),
                verdict.value,
                verdict.unit,
                verdict.direction.symbol(),
                verdict.limit,
                verdict.unit
            );
        }
        println!("   📝 Report saved to: {}", report_path.display());
        println!("   💾 JSON summary saved to: {}", json_path.display());
    }

    pub fn print_security_summary(summary: &SecuritySummary, report_path: &Path, json_path: &Path) {
        println!("🔒 Security analysis complete:");
        println!("   Total alerts: {}", summary.total_alerts);
        println!("   High: {} 🔴", summary.high_risk_count);
        println!("   Medium: {} 🟡", summary.medium_risk_count);
        println!("   Low: {} 🟢", summary.low_risk_count);
        println!("   Informational: {} 🔵", summary.info_risk_count);
        if summary.unknown_risk_count > 0 {
            println!("   Unknown: {} ❓", summary.unknown_risk_count);
        }
        if !summary.warnings.is_empty() {
            println!("   ⚠️ {} scan file(s) skipped", summary.warnings.len());
        }
        println!("   Overall status: {}", SecurityReport::status_line(summary));
        println!("   📝 Report saved to: {}", report_path.display());
        println!("   💾 JSON summary saved to: {}", json_path.display());
    }
}
