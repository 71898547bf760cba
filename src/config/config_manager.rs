use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, LOG_LEVELS, MAX_REPORTED_ALERTS};
use crate::errors::{VerdictError, VerdictResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# runverdict configuration

[output]
# Where reports and JSON summaries are written when no path is given on the command line
performance_report = "performance-report.md"
performance_json = "performance-summary.json"
security_report = "security-report.md"
security_json = "security-summary.json"

# Print the full Markdown report to stdout instead of the short summary
verbose = false

[security]
# Exit non-zero whenever a High risk alert is found
fail_on_high = false

# Number of ranked alerts detailed in the Markdown report (1-20)
report_detail_limit = 10

[logging]
# off, error, warn, info, debug, trace
level = "info"
"#;

pub struct ConfigManager;

impl ConfigManager {

    /// `--config` wins, then `$RUNVERDICT_CONFIG`, then `~/runverdict/config.toml`.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// An explicitly requested file must exist. The implicit locations are
    /// optional and fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> VerdictResult<Config> {
        let Some(path) = Self::resolve_path(explicit) else {
            return Ok(Config::default());
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(VerdictError::config_error(
                    &format!("config file '{}' does not exist", path.display()),
                    Some("Run 'runverdict init' to create one"),
                ));
            }
            return Ok(Config::default());
        }

        log::debug!("📋 Loading config from: {}", path.display());
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> VerdictResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| VerdictError::file_error(path, "read config", &e.to_string()))?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            VerdictError::config_error(
                &format!("invalid config '{}': {}", path.display(), e.message()),
                Some("Check the TOML syntax"),
            )
        })?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    pub fn create_sample_config(path: &Path) -> VerdictResult<()> {
        if path.exists() {
            return Err(VerdictError::config_error(
                &format!("config file '{}' already exists", path.display()),
                Some("Remove it first or edit it directly"),
            ));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| VerdictError::file_error(parent, "create config directory", &e.to_string()))?;
        }
        fs::write(path, SAMPLE_CONFIG)
            .map_err(|e| VerdictError::file_error(path, "write config", &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> VerdictResult<()> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
            errors.push(format!("unknown log level '{}'", config.logging.level));
        }

        let limit = config.security.report_detail_limit;
        if limit == 0 || limit > MAX_REPORTED_ALERTS {
            errors.push(format!(
                "security.report_detail_limit must be between 1 and {}, got {}",
                MAX_REPORTED_ALERTS, limit
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(VerdictError::config_error(
                &errors.join("; "),
                Some(&format!("Valid log levels: {}", LOG_LEVELS.join(", "))),
            ))
        }
    }
}
