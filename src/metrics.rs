use std::collections::BTreeMap;

use crate::{duration::Latency, record::LogRecord};

/// Latency and status statistics over a finished set of records.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Metrics {
    pub count: usize,
    pub total_time: Latency,
    pub min_time: Latency,
    pub max_time: Latency,
    pub status_counts: BTreeMap<i64, usize>,
}

impl Metrics {
    /// Folds `records` into a single summary. The result does not depend on
    /// the order of `records`.
    pub fn from_records(records: &[LogRecord]) -> Self {
        let Some(first) = records.first() else {
            return Self::default();
        };

        let seed = Self {
            min_time: first.duration,
            max_time: first.duration,
            ..Default::default()
        };

        records.iter().fold(seed, |mut metrics, record| {
            metrics.count += 1;
            metrics.total_time = metrics.total_time.saturating_add(record.duration);
            *metrics.status_counts.entry(record.code).or_insert(0) += 1;
            metrics.min_time = metrics.min_time.min(record.duration);
            metrics.max_time = metrics.max_time.max(record.duration);
            metrics
        })
    }

    /// Mean latency, `None` for an empty set.
    pub fn average_time(&self) -> Option<Latency> {
        if self.count == 0 {
            return None;
        }
        i64::try_from(self.count)
            .ok()
            .map(|count| self.total_time / count)
    }
}
