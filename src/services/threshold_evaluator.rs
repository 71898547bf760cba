use crate::helpers::format_helper::round2;
use crate::services::summary_builder::SummaryBuilder;
use crate::structs::metric_set::MetricSet;
use crate::structs::metric_verdict::MetricVerdict;
use crate::structs::performance_run::PerformanceRun;
use crate::structs::run_summary::RunSummary;
use crate::structs::threshold_policy::ThresholdPolicy;

pub struct ThresholdEvaluator;

impl ThresholdEvaluator {

    pub fn evaluate(run: &PerformanceRun, policy: &ThresholdPolicy) -> RunSummary {
        Self::evaluate_with(run, policy, &SummaryBuilder::now())
    }

    pub fn evaluate_with(run: &PerformanceRun, policy: &ThresholdPolicy, builder: &SummaryBuilder) -> RunSummary {
        let results = Self::judge(&run.metrics, policy);
        let summary = builder.performance(&run.totals, results);
        log::debug!(
            "Evaluated {} metrics, {} failed, overall {}",
            summary.results.len(),
            summary.failed_metrics().count(),
            summary.overall_status
        );
        summary
    }

    /// One verdict per policy entry, in policy order. Samples the policy does
    /// not name are ignored; policy metrics with no sample are judged at the
    /// absent value. Pass/fail uses the raw value, the verdict shows it rounded.
    pub fn judge(metrics: &MetricSet, policy: &ThresholdPolicy) -> Vec<MetricVerdict> {
        policy
            .entries()
            .map(|(name, threshold)| {
                let value = metrics.value_of(name);
                MetricVerdict {
                    name: name.to_string(),
                    value: round2(value),
                    limit: threshold.limit,
                    unit: threshold.unit.clone(),
                    direction: threshold.direction,
                    passed: threshold.admits(value),
                }
            })
            .collect()
    }
}
