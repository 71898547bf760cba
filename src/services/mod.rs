pub mod alert_aggregator;
pub mod alert_ingestor;
pub mod metric_ingestor;
pub mod report_writer;
pub mod risk_classifier;
pub mod summary_builder;
pub mod threshold_evaluator;
