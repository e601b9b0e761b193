//! Named distance penalties.
//!
//! Each metadata source contributes penalties under string keys
//! (e.g. `"source"`); the importer merges them and turns the total into a
//! match score. Weighting and normalization are the importer's business.

use std::collections::BTreeMap;

/// Accumulated penalties, grouped by key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distance {
    penalties: BTreeMap<String, Vec<f64>>,
}

impl Distance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a penalty of `dist` under `key`.
    pub fn add(&mut self, key: impl Into<String>, dist: f64) {
        self.penalties.entry(key.into()).or_default().push(dist);
    }

    /// Merge all penalties from `other` into this distance.
    pub fn update(&mut self, other: &Distance) {
        for (key, values) in &other.penalties {
            self.penalties
                .entry(key.clone())
                .or_default()
                .extend(values.iter().copied());
        }
    }

    /// Sum of the penalties recorded under `key` (0.0 if none)
    pub fn get(&self, key: &str) -> f64 {
        self.penalties
            .get(key)
            .map(|values| values.iter().sum())
            .unwrap_or(0.0)
    }

    /// Unweighted sum of every penalty
    pub fn raw_distance(&self) -> f64 {
        self.penalties.values().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.penalties.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.penalties.keys().map(String::as_str)
    }
}
