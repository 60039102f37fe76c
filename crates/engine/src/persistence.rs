//! Best-effort persistence hand-off
//!
//! Query history and analytics counters may be handed to an external
//! key-value collaborator between sessions. The in-memory state is
//! authoritative; sinks are advisory, and failures are logged and dropped
//! by the facade rather than propagated.

use crate::analytics::AnalyticsSnapshot;
use findex_core::{QueryHistoryEntry, Result};
use parking_lot::Mutex;

/// External persistence collaborator
pub trait PersistenceSink: Send + Sync {
    /// Hand off the current query history
    fn persist_history(&self, entries: &[QueryHistoryEntry]) -> Result<()>;

    /// Hand off the current analytics counters
    fn persist_analytics(&self, snapshot: &AnalyticsSnapshot) -> Result<()>;
}

/// In-memory sink, for tests and single-process embedding
#[derive(Debug, Default)]
pub struct MemorySink {
    history: Mutex<Vec<QueryHistoryEntry>>,
    analytics: Mutex<AnalyticsSnapshot>,
}

impl MemorySink {
    /// Fresh empty sink
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Last persisted history
    pub fn history(&self) -> Vec<QueryHistoryEntry> {
        self.history.lock().clone()
    }

    /// Last persisted analytics snapshot
    pub fn analytics(&self) -> AnalyticsSnapshot {
        self.analytics.lock().clone()
    }
}

impl PersistenceSink for MemorySink {
    fn persist_history(&self, entries: &[QueryHistoryEntry]) -> Result<()> {
        *self.history.lock() = entries.to_vec();
        Ok(())
    }

    fn persist_analytics(&self, snapshot: &AnalyticsSnapshot) -> Result<()> {
        *self.analytics.lock() = snapshot.clone();
        Ok(())
    }
}
