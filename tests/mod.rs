mod common;
mod performance_pipeline;
mod security_pipeline;
