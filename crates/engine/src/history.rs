//! Capacity-bounded query history
//!
//! Append-only within its cap: entries are recorded on submission, trimmed
//! oldest-first past the cap, and never edited. This is the engine's only
//! mutable state outside the published index, so the facade serializes
//! access with a mutex.

use findex_core::limits::HISTORY_CAP;
use findex_core::QueryHistoryEntry;
use std::collections::VecDeque;

/// Bounded sequence of submitted queries, oldest first
#[derive(Debug)]
pub struct QueryHistory {
    entries: VecDeque<QueryHistoryEntry>,
    cap: usize,
}

impl Default for QueryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryHistory {
    /// History with the standard cap
    pub fn new() -> Self {
        Self::with_cap(HISTORY_CAP)
    }

    /// History with a custom cap
    pub fn with_cap(cap: usize) -> Self {
        QueryHistory {
            entries: VecDeque::new(),
            cap,
        }
    }

    /// Record a submitted query, evicting the oldest entry past the cap
    pub fn record(&mut self, query: impl Into<String>) {
        self.entries.push_back(QueryHistoryEntry::now(query));
        while self.entries.len() > self.cap {
            self.entries.pop_front();
        }
    }

    /// Snapshot of all entries, oldest first
    pub fn snapshot(&self) -> Vec<QueryHistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
