use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_performance_report")]
    pub performance_report: String,

    #[serde(default = "ConfigHelper::default_performance_json")]
    pub performance_json: String,

    #[serde(default = "ConfigHelper::default_security_report")]
    pub security_report: String,

    #[serde(default = "ConfigHelper::default_security_json")]
    pub security_json: String,

    #[serde(default = "ConfigHelper::default_verbose")]
    pub verbose: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            performance_report: ConfigHelper::default_performance_report(),
            performance_json: ConfigHelper::default_performance_json(),
            security_report: ConfigHelper::default_security_report(),
            security_json: ConfigHelper::default_security_json(),
            verbose: ConfigHelper::default_verbose(),
        }
    }
}
