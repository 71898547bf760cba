use serde::{Deserialize, Serialize};
use crate::structs::metric_sample::MetricSample;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    samples: Vec<MetricSample>,
}

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A later sample with the same name replaces the earlier one.
    pub fn insert(&mut self, sample: MetricSample) {
        match self.samples.iter_mut().find(|existing| existing.name == sample.name) {
            Some(existing) => *existing = sample,
            None => self.samples.push(sample),
        }
    }

    pub fn get(&self, name: &str) -> Option<&MetricSample> {
        self.samples.iter().find(|sample| sample.name == name)
    }

    /// The sample's value, or [`MetricSample::ABSENT_VALUE`] when it was never ingested.
    pub fn value_of(&self, name: &str) -> f64 {
        self.get(name).map_or(MetricSample::ABSENT_VALUE, |sample| sample.value)
    }

    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl FromIterator<MetricSample> for MetricSet {
    fn from_iter<T: IntoIterator<Item = MetricSample>>(iter: T) -> Self {
        let mut set = MetricSet::new();
        for sample in iter {
            set.insert(sample);
        }
        set
    }
}

impl FromIterator<(&'static str, f64)> for MetricSet {
    fn from_iter<T: IntoIterator<Item = (&'static str, f64)>>(iter: T) -> Self {
        iter.into_iter().map(|(name, value)| MetricSample::new(name, value)).collect()
    }
}
