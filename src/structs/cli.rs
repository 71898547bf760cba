use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "runverdict", version)]
#[clap(about = "Pass/fail verdicts for load-test and security-scan results", long_about = None)]
pub struct Cli {
    /// Configuration file (default: $RUNVERDICT_CONFIG or ~/runverdict/config.toml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level filter, e.g. info, debug, warn
    #[clap(long, global = true)]
    pub log_level: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}
