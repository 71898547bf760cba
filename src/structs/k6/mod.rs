pub mod k6_metric;
pub mod k6_state;
pub mod k6_summary;
