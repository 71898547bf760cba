pub mod commands;
pub mod exit_trigger;
pub mod file_outcome;
pub mod overall_status;
pub mod risk_level;
pub mod threshold_direction;
