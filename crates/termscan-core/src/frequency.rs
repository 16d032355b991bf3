//! FrequencyMap: accumulates completed matches into occurrence counts.
//!
//! Keys are canonical match strings (tokens joined by one space). A key only
//! exists once something has been recorded against it, so a term that never
//! matched is absent rather than present with a zero count.

use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    counts: HashMap<String, i64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to the count for `key`, inserting it at `delta` if absent.
    ///
    /// Negative deltas are accepted and the result is not clamped, so a run of
    /// records can leave a count below zero. The match path only ever
    /// increments; decrements are for callers making corrections.
    pub fn record(&mut self, key: impl Into<String>, delta: i64) {
        *self.counts.entry(key.into()).or_insert(0) += delta;
    }

    /// `record(key, 1)`.
    pub fn increment(&mut self, key: impl Into<String>) {
        self.record(key, 1);
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.counts.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> i64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries ordered by count (highest first), ties broken by key.
    pub fn sorted(&self) -> Vec<(&str, i64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn into_inner(self) -> HashMap<String, i64> {
        self.counts
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for FrequencyMap {
    fn from_iter<T: IntoIterator<Item = (K, i64)>>(iter: T) -> Self {
        let mut map = FrequencyMap::new();
        for (key, delta) in iter {
            map.record(key, delta);
        }
        map
    }
}

impl From<FrequencyMap> for HashMap<String, i64> {
    fn from(map: FrequencyMap) -> Self {
        map.counts
    }
}
