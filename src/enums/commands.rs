use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Evaluate a k6 summary export against the threshold policy
    Performance {
        /// k6 JSON summary file
        results_file: PathBuf,
        /// Markdown report path (default: performance-report.md)
        #[clap(short, long)]
        output: Option<PathBuf>,
        /// JSON summary path (default: performance-summary.json)
        #[clap(long)]
        json: Option<PathBuf>,
        /// Print the full report instead of the short summary
        #[clap(short, long)]
        verbose: bool,
    },
    /// Classify and rank alerts from one or more OWASP ZAP JSON reports
    Security {
        /// ZAP JSON report files
        #[clap(required = true)]
        results_files: Vec<PathBuf>,
        /// Markdown report path (default: security-report.md)
        #[clap(short, long)]
        output: Option<PathBuf>,
        /// JSON summary path (default: security-summary.json)
        #[clap(long)]
        json: Option<PathBuf>,
        /// Print the full report instead of the short summary
        #[clap(short, long)]
        verbose: bool,
        /// Exit non-zero whenever a High risk alert is present
        #[clap(long)]
        fail_on_high: bool,
    },
}
