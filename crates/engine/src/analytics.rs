//! Lightweight query analytics
//!
//! Per-query result counts and per-suggestion click counts. Counters are
//! concurrent so clicks arriving from the presentation layer never contend
//! with query processing; snapshots are ordered for stable serialization.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Concurrent analytics counters
#[derive(Debug, Default)]
pub struct Analytics {
    /// Query -> times submitted
    search_counts: DashMap<String, u64>,
    /// Query -> result count of the latest submission
    result_counts: DashMap<String, usize>,
    /// Suggestion text -> clicks
    click_counts: DashMap<String, u64>,
}

impl Analytics {
    /// Fresh counters
    pub fn new() -> Self {
        Analytics::default()
    }

    /// Record a submitted search and its result count
    pub fn record_search(&self, query: &str, result_count: usize) {
        *self.search_counts.entry(query.to_string()).or_insert(0) += 1;
        self.result_counts.insert(query.to_string(), result_count);
    }

    /// Record a click on a served suggestion
    pub fn record_click(&self, suggestion: &str) {
        *self.click_counts.entry(suggestion.to_string()).or_insert(0) += 1;
    }

    /// Times a query has been submitted
    pub fn search_count(&self, query: &str) -> u64 {
        self.search_counts.get(query).map(|c| *c).unwrap_or(0)
    }

    /// Result count of a query's latest submission
    pub fn result_count(&self, query: &str) -> Option<usize> {
        self.result_counts.get(query).map(|c| *c)
    }

    /// Clicks recorded for a suggestion
    pub fn click_count(&self, suggestion: &str) -> u64 {
        self.click_counts.get(suggestion).map(|c| *c).unwrap_or(0)
    }

    /// Ordered snapshot for persistence hand-off
    pub fn snapshot(&self) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            search_counts: self
                .search_counts
                .iter()
                .map(|e| (e.key().clone(), *e.value()))
                .collect(),
            result_counts: self
                .result_counts
                .iter()
                .map(|e| (e.key().clone(), *e.value()))
                .collect(),
            click_counts: self
                .click_counts
                .iter()
                .map(|e| (e.key().clone(), *e.value()))
                .collect(),
        }
    }
}

/// Point-in-time analytics state, ordered for stable serialization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// Query -> times submitted
    pub search_counts: BTreeMap<String, u64>,
    /// Query -> result count of the latest submission
    pub result_counts: BTreeMap<String, usize>,
    /// Suggestion text -> clicks
    pub click_counts: BTreeMap<String, u64>,
}
