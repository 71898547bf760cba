use std::path::{Path, PathBuf};
use runverdict::structs::config::config::Config;
use tempfile::TempDir;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

/// Config whose default outputs land in `dir`.
pub fn config_in(dir: &TempDir) -> Config {
    let mut config = Config::default();
    let out = |name: &str| dir.path().join(name).display().to_string();
    config.output.performance_report = out("performance-report.md");
    config.output.performance_json = out("performance-summary.json");
    config.output.security_report = out("security-report.md");
    config.output.security_json = out("security-summary.json");
    config
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).expect("summary written");
    serde_json::from_str(&content).expect("summary is valid JSON")
}
