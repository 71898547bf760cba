use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{EXIT_ERROR, EXIT_FAIL, EXIT_PASS};
use crate::enums::commands::Commands;
use crate::enums::exit_trigger::ExitTrigger;
use crate::errors::{ErrorHandler, VerdictError, VerdictResult};
use crate::logger::summary_logger::SummaryLogger;
use crate::reports::performance_report::PerformanceReport;
use crate::reports::security_report::SecurityReport;
use crate::services::alert_aggregator::AlertAggregator;
use crate::services::alert_ingestor::AlertIngestor;
use crate::services::metric_ingestor::MetricIngestor;
use crate::services::report_writer::ReportWriter;
use crate::services::threshold_evaluator::ThresholdEvaluator;
use crate::structs::config::config::Config;
use crate::structs::threshold_policy::ThresholdPolicy;

pub struct CommandRunner {
    config: Config,
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
            start_time: None,
        }
    }

    /// Runs one command and maps its outcome to a process exit code.
    pub fn run_command(&mut self, command: Commands) -> i32 {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Performance { results_file, output, json, verbose } => {
                self.performance_command(&results_file, output, json, verbose)
            }
            Commands::Security { results_files, output, json, verbose, fail_on_high } => {
                self.security_command(&results_files, output, json, verbose, fail_on_high)
            }
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        match result {
            Ok(code) => code,
            Err(e) => {
                ErrorHandler::handle_error(&e);
                EXIT_ERROR
            }
        }
    }

    fn init_command(&self) -> VerdictResult<i32> {
        log::info!("🚀 Initializing runverdict configuration...");

        let path = ConfigManager::resolve_path(self.config_path.as_deref()).ok_or_else(|| {
            VerdictError::config_error("could not determine a config location", Some("Pass --config <file>"))
        })?;
        ConfigManager::create_sample_config(&path)?;

        log::info!("📝 Edit {} to change report locations and exit behaviour.", path.display());
        Ok(EXIT_PASS)
    }

    pub fn performance_command(
        &self,
        results_file: &Path,
        output: Option<PathBuf>,
        json: Option<PathBuf>,
        verbose: bool,
    ) -> VerdictResult<i32> {
        log::info!("🔍 Analyzing k6 results: {}", results_file.display());

        let run = MetricIngestor::load(results_file)?;
        let summary = ThresholdEvaluator::evaluate(&run, ThresholdPolicy::standard());
        let report = PerformanceReport::render(&summary);

        let report_path = output.unwrap_or_else(|| PathBuf::from(&self.config.output.performance_report));
        let json_path = json.unwrap_or_else(|| PathBuf::from(&self.config.output.performance_json));
        ReportWriter::write_markdown(&report_path, &report)?;
        ReportWriter::write_json(&json_path, &summary)?;

        if verbose || self.config.output.verbose {
            println!("{}", report);
        } else {
            SummaryLogger::print_performance_summary(&summary, &report_path, &json_path);
        }

        if summary.overall_status.is_pass() {
            Ok(EXIT_PASS)
        } else {
            let failed: Vec<&str> = summary.failed_metrics().map(|v| v.name.as_str()).collect();
            log::error!("❌ Performance thresholds failed: {}", failed.join(", "));
            Ok(EXIT_FAIL)
        }
    }

    pub fn security_command(
        &self,
        results_files: &[PathBuf],
        output: Option<PathBuf>,
        json: Option<PathBuf>,
        verbose: bool,
        fail_on_high: bool,
    ) -> VerdictResult<i32> {
        log::info!("🔍 Analyzing {} ZAP report(s)", results_files.len());

        let batch = AlertIngestor::ingest(results_files);
        let summary = AlertAggregator::aggregate(batch);
        let report = SecurityReport::render(&summary, self.config.security.report_detail_limit);

        let report_path = output.unwrap_or_else(|| PathBuf::from(&self.config.output.security_report));
        let json_path = json.unwrap_or_else(|| PathBuf::from(&self.config.output.security_json));
        ReportWriter::write_markdown(&report_path, &report)?;
        ReportWriter::write_json(&json_path, &summary)?;

        if verbose || self.config.output.verbose {
            println!("{}", report);
        } else {
            SummaryLogger::print_security_summary(&summary, &report_path, &json_path);
        }

        let trigger = ExitTrigger::from_fail_on_high(fail_on_high || self.config.security.fail_on_high);
        if trigger.should_fail(&summary) {
            log::error!("❌ Found {} high risk alert(s), failing", summary.high_risk_count);
            Ok(EXIT_FAIL)
        } else {
            Ok(EXIT_PASS)
        }
    }
}
