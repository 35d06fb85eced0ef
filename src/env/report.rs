use std::{
    collections::{btree_map::Entry, BTreeMap},
    ops::Index,
};

/// Named per-episode metrics accumulated by an environment
///
/// Environments bump their entries while stepping; the training loop drains them with [`Report::take`]
/// at the end of each episode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    metrics: BTreeMap<&'static str, f64>,
}

impl Report {
    /// Create a report with the given metric names, all starting at zero
    pub fn new(keys: Vec<&'static str>) -> Self {
        Self {
            metrics: keys.into_iter().map(|k| (k, 0.0)).collect(),
        }
    }

    /// Metric names in the same order as the values returned by [`Report::take`]
    pub fn keys(&self) -> Vec<&'static str> {
        self.metrics.keys().copied().collect()
    }

    /// Get the entry for a metric
    ///
    /// Unknown keys are inserted on demand, so prefer naming every metric in [`Report::new`].
    pub fn entry(&mut self, key: &'static str) -> Entry<'_, &'static str, f64> {
        self.metrics.entry(key)
    }

    /// Take the accumulated values, zeroing every metric for the next episode
    pub fn take(&mut self) -> BTreeMap<&'static str, f64> {
        let zeroed = self.metrics.keys().map(|&k| (k, 0.0)).collect();
        std::mem::replace(&mut self.metrics, zeroed)
    }
}

impl Index<&str> for Report {
    type Output = f64;

    fn index(&self, key: &str) -> &Self::Output {
        &self.metrics[key]
    }
}
