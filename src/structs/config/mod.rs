pub mod config;
pub mod logging_config;
pub mod output_config;
pub mod security_config;
