use std::path::PathBuf;
use runverdict::config::constants::{EXIT_FAIL, EXIT_PASS, MAX_REPORTED_ALERTS};
use runverdict::enums::commands::Commands;
use runverdict::enums::exit_trigger::ExitTrigger;
use runverdict::enums::overall_status::OverallStatus;
use runverdict::errors::VerdictError;
use runverdict::services::alert_aggregator::AlertAggregator;
use runverdict::services::alert_ingestor::AlertIngestor;
use runverdict::services::summary_builder::SummaryBuilder;
use runverdict::workers::command_runner::CommandRunner;
use tempfile::TempDir;

use crate::common::{config_in, fixture, read_json};

fn security(files: Vec<PathBuf>, fail_on_high: bool) -> Commands {
    Commands::Security {
        results_files: files,
        output: None,
        json: None,
        verbose: false,
        fail_on_high,
    }
}

#[test]
fn multiple_files_are_aggregated_in_order() {
    let batch = AlertIngestor::ingest(&[fixture("zap_api.json"), fixture("zap_web.json")]);
    let summary = AlertAggregator::aggregate_with(batch, &SummaryBuilder::at("t"));

    assert_eq!(summary.total_alerts, 6);
    assert_eq!(summary.high_risk_count, 2);
    assert_eq!(summary.medium_risk_count, 1);
    assert_eq!(summary.low_risk_count, 1);
    assert_eq!(summary.info_risk_count, 1);
    assert_eq!(summary.unknown_risk_count, 1);
    assert_eq!(summary.overall_status, OverallStatus::Fail);

    let names: Vec<&str> = summary.alerts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "SQL Injection",
            "Cross Site Scripting (Reflected)",
            "Content Security Policy (CSP) Header Not Set",
            "Server Leaks Version Information",
            "Modern Web Application",
            "Custom Scanner Finding",
        ]
    );

    let unknown = summary.alerts.last().unwrap();
    assert_eq!(unknown.risk_level, "Unknown");
    assert_eq!(unknown.confidence_level, "Unknown");

    assert_eq!(summary.scan_info.len(), 2);
    assert_eq!(summary.scan_info[0].url(), "https://api.example.com:443");
    assert_eq!(summary.scan_info[1].url(), "http://web.example.com:8080");
}

#[test]
fn bad_files_become_warnings() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let batch = AlertIngestor::ingest(&[missing, fixture("zap_broken.json"), fixture("zap_medium_only.json")]);

    assert_eq!(batch.alerts.len(), 2);
    assert_eq!(batch.warnings.len(), 2);
    assert!(matches!(batch.warnings[0].reason, VerdictError::MissingInput { .. }));
    assert!(matches!(batch.warnings[1].reason, VerdictError::MalformedInput { .. }));

    let summary = AlertAggregator::aggregate(batch);
    assert_eq!(summary.overall_status, OverallStatus::Pass);
    assert_eq!(summary.warnings.len(), 2);
}

#[test]
fn only_bad_files_still_produce_a_passing_summary() {
    let dir = TempDir::new().unwrap();
    let summary = AlertAggregator::aggregate(AlertIngestor::ingest(&[dir.path().join("nope.json")]));
    assert_eq!(summary.total_alerts, 0);
    assert_eq!(summary.overall_status, OverallStatus::Pass);
    assert!(!ExitTrigger::OverallStatus.should_fail(&summary));
}

#[test]
fn high_alerts_fail_the_command() {
    let dir = TempDir::new().unwrap();
    let mut runner = CommandRunner::new(config_in(&dir), None);

    let code = runner.run_command(security(vec![fixture("zap_api.json")], false));
    assert_eq!(code, EXIT_FAIL);

    let json = read_json(&dir.path().join("security-summary.json"));
    assert_eq!(json["overall_status"], "fail");
    assert_eq!(json["high_risk_count"], 1);
    assert_eq!(json["risk_counts"]["High"], 1);
    assert_eq!(json["risk_counts"]["Unknown"], 0);
    assert_eq!(json["alerts"][0]["name"], "SQL Injection");
    assert_eq!(json["alerts"][0]["riskdesc"], "High - Medium");
    assert_eq!(json["scan_info"][0]["ssl"], true);

    let report = std::fs::read_to_string(dir.path().join("security-report.md")).unwrap();
    assert!(report.contains("### 1. 🔴 SQL Injection"));
}

#[test]
fn fail_on_high_from_config_is_honoured() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.security.fail_on_high = true;
    let mut runner = CommandRunner::new(config, None);

    assert_eq!(runner.run_command(security(vec![fixture("zap_web.json")], false)), EXIT_FAIL);
    assert_eq!(runner.run_command(security(vec![fixture("zap_medium_only.json")], false)), EXIT_PASS);
}

#[test]
fn medium_and_low_alerts_pass_the_command() {
    let dir = TempDir::new().unwrap();
    let mut runner = CommandRunner::new(config_in(&dir), None);

    let code = runner.run_command(security(vec![fixture("zap_medium_only.json")], true));
    assert_eq!(code, EXIT_PASS);
}

#[test]
fn large_scans_are_truncated_in_the_summary() {
    let dir = TempDir::new().unwrap();
    let alerts: Vec<serde_json::Value> = (0..25)
        .map(|i| {
            let risk = if i % 5 == 0 { "High" } else { "Low" };
            serde_json::json!({"name": format!("alert-{}", i), "riskdesc": format!("{} - Medium", risk)})
        })
        .collect();
    let path = dir.path().join("large.json");
    std::fs::write(&path, serde_json::json!({"site": [{"@host": "big", "alerts": alerts}]}).to_string()).unwrap();

    let summary = AlertAggregator::aggregate(AlertIngestor::ingest(&[path]));

    assert_eq!(summary.total_alerts, 25);
    assert_eq!(summary.alerts.len(), MAX_REPORTED_ALERTS);
    assert_eq!(summary.high_risk_count, 5);
    assert_eq!(summary.low_risk_count, 20);
    let leading: Vec<&str> = summary.alerts.iter().take(6).map(|a| a.name.as_str()).collect();
    assert_eq!(leading, vec!["alert-0", "alert-5", "alert-10", "alert-15", "alert-20", "alert-1"]);
}
