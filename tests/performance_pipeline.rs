use runverdict::config::constants::{AVG_RESPONSE_TIME, ERROR_RATE, EXIT_ERROR, EXIT_FAIL, EXIT_PASS, THROUGHPUT};
use runverdict::enums::commands::Commands;
use runverdict::enums::overall_status::OverallStatus;
use runverdict::services::metric_ingestor::MetricIngestor;
use runverdict::services::summary_builder::SummaryBuilder;
use runverdict::services::threshold_evaluator::ThresholdEvaluator;
use runverdict::structs::threshold_policy::ThresholdPolicy;
use runverdict::workers::command_runner::CommandRunner;
use tempfile::TempDir;

use crate::common::{config_in, fixture, read_json};

#[test]
fn passing_run_is_evaluated_end_to_end() {
    let run = MetricIngestor::load(&fixture("k6_passing.json")).unwrap();
    let summary = ThresholdEvaluator::evaluate_with(&run, ThresholdPolicy::standard(), &SummaryBuilder::at("t"));

    assert_eq!(summary.overall_status, OverallStatus::Pass);
    assert_eq!(summary.results.len(), 5);
    assert_eq!(summary.total_requests, 12000);
    assert_eq!(summary.max_vus, 50);
    assert_eq!(summary.data_received, 48213760);
    assert_eq!(summary.data_sent, 1536000);
    assert!((summary.test_duration - 84.00075).abs() < 1e-9);

    assert_eq!(summary.verdict(AVG_RESPONSE_TIME).unwrap().value, 85.43);
    assert_eq!(summary.verdict(ERROR_RATE).unwrap().value, 0.25);
    assert_eq!(summary.verdict(THROUGHPUT).unwrap().value, 142.86);
}

#[test]
fn failing_run_exits_non_zero_and_writes_outputs() {
    let dir = TempDir::new().unwrap();
    let mut runner = CommandRunner::new(config_in(&dir), None);

    let code = runner.run_command(Commands::Performance {
        results_file: fixture("k6_failing.json"),
        output: None,
        json: None,
        verbose: false,
    });
    assert_eq!(code, EXIT_FAIL);

    let json = read_json(&dir.path().join("performance-summary.json"));
    assert_eq!(json["overall_status"], "fail");
    assert_eq!(json["total_requests"], 800);
    assert_eq!(json["max_vus"], 100);
    assert_eq!(json["test_duration"], 20.0);
    assert_eq!(json["results"]["throughput"]["passed"], false);
    assert_eq!(json["results"]["throughput"]["threshold"], 100.0);
    assert_eq!(json["results"]["error_rate"]["value"], 4.0);

    let report = std::fs::read_to_string(dir.path().join("performance-report.md")).unwrap();
    assert!(report.contains("❌ Failed"));
    assert!(report.contains("Throughput is low"));
}

#[test]
fn passing_run_exits_zero_with_explicit_paths() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("custom.md");
    let json_path = dir.path().join("custom.json");
    let mut runner = CommandRunner::new(config_in(&dir), None);

    let code = runner.run_command(Commands::Performance {
        results_file: fixture("k6_passing.json"),
        output: Some(report_path.clone()),
        json: Some(json_path.clone()),
        verbose: true,
    });

    assert_eq!(code, EXIT_PASS);
    assert!(report_path.exists());
    assert_eq!(read_json(&json_path)["overall_status"], "pass");
    assert!(!dir.path().join("performance-report.md").exists());
}

#[test]
fn missing_results_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let mut runner = CommandRunner::new(config_in(&dir), None);

    let code = runner.run_command(Commands::Performance {
        results_file: dir.path().join("no-such-results.json"),
        output: None,
        json: None,
        verbose: false,
    });

    assert_eq!(code, EXIT_ERROR);
    assert!(!dir.path().join("performance-summary.json").exists());
}

#[test]
fn malformed_results_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{\"metrics\": {").unwrap();
    let mut runner = CommandRunner::new(config_in(&dir), None);

    let code = runner.run_command(Commands::Performance {
        results_file: broken,
        output: None,
        json: None,
        verbose: false,
    });

    assert_eq!(code, EXIT_ERROR);
}
