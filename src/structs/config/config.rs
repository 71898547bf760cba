use serde::{Deserialize, Serialize};
use crate::structs::config::logging_config::LoggingConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::security_config::SecurityConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub security: SecurityConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
