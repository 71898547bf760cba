use clap::Parser;
use env_logger::Env;
use runverdict::config::config_manager::ConfigManager;
use runverdict::config::constants::{DEFAULT_LOG_LEVEL, EXIT_ERROR};
use runverdict::enums::commands::Commands;
use runverdict::errors::ErrorHandler;
use runverdict::structs::cli::Cli;
use runverdict::structs::config::config::Config;
use runverdict::workers::command_runner::CommandRunner;

fn main() {
    let cli = Cli::parse();

    // init must work before any config file exists
    let config = match cli.command {
        Commands::Init => Ok(Config::default()),
        _ => ConfigManager::load(cli.config.as_deref()),
    };

    let level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            std::process::exit(EXIT_ERROR);
        }
    };

    let mut runner = CommandRunner::new(config, cli.config);
    let code = runner.run_command(cli.command);
    std::process::exit(code);
}
