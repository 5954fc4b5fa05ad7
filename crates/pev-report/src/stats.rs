//! Result types for the analysis queries.

use std::collections::BTreeMap;

/// Max, min, and median of a per-patient value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadStats {
    pub max: i64,
    pub min: i64,
    pub median: i64,
}

/// Distinct patients per gender label.
///
/// Keyed by the label as stored; any number of categories is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderCounts(pub BTreeMap<String, u64>);

impl GenderCounts {
    pub fn get(&self, label: &str) -> Option<u64> {
        self.0.get(label).copied()
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(label, count)| (label.as_str(), *count))
    }
}
