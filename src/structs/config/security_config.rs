use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SecurityConfig {
    #[serde(default = "ConfigHelper::default_fail_on_high")]
    pub fail_on_high: bool,

    /// How many of the ranked alerts the Markdown report details.
    #[serde(default = "ConfigHelper::default_report_detail_limit")]
    pub report_detail_limit: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            fail_on_high: ConfigHelper::default_fail_on_high(),
            report_detail_limit: ConfigHelper::default_report_detail_limit(),
        }
    }
}
