pub mod config_helper;
pub mod format_helper;
pub mod serde_helper;
