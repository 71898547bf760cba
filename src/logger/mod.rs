pub mod summary_logger;
