use crate::structs::metric_set::MetricSet;
use crate::structs::run_totals::RunTotals;

/// Everything the metric ingestor extracts from one k6 summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceRun {
    pub metrics: MetricSet,
    pub totals: RunTotals,
}

impl PerformanceRun {
    pub fn new(metrics: MetricSet, totals: RunTotals) -> Self {
        Self { metrics, totals }
    }
}
