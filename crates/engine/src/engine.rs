//! Engine facade: result/suggestion compilation over a published index
//!
//! This module provides the SearchEngine struct that orchestrates:
//! - Catalog loading (explicit or lazy on first use)
//! - Atomic index publication
//! - Suggestion and search compilation
//! - Query history and analytics recording
//! - Best-effort persistence hand-off
//!
//! The engine is constructed with its collaborators injected; there is no
//! global instance. All query-time entry points are infallible: the worst
//! case is an empty result, which is always a renderable state.

use crate::alternatives::alternative_queries;
use crate::analytics::Analytics;
use crate::history::QueryHistory;
use crate::persistence::PersistenceSink;
use findex_catalog::CatalogLoader;
use findex_core::limits::MIN_QUERY_LEN;
use findex_core::{Candidate, ProductId, ProductRecord, QueryHistoryEntry, SearchOutcome};
use findex_search::{IndexBuilder, SearchIndex};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Multi-strategy product search and suggestion engine
///
/// # Index lifecycle
///
/// The index is rebuilt wholesale from a catalog snapshot and published
/// atomically: queries racing a rebuild see either the old or the new
/// index, never a partially built one. A query arriving before the first
/// rebuild triggers a lazy load-then-index cycle.
///
/// # Shared state
///
/// The published index is shared read-only. Query history is the only other
/// mutable state and is serialized behind a mutex; analytics counters are
/// concurrent.
pub struct SearchEngine {
    loader: CatalogLoader,
    index: RwLock<Arc<SearchIndex>>,
    ready: AtomicBool,
    history: Mutex<QueryHistory>,
    analytics: Analytics,
    persistence: Option<Box<dyn PersistenceSink>>,
}

impl SearchEngine {
    /// Engine over a catalog loader, with no persistence sink
    pub fn new(loader: CatalogLoader) -> Self {
        SearchEngine {
            loader,
            index: RwLock::new(Arc::new(SearchIndex::empty())),
            ready: AtomicBool::new(false),
            history: Mutex::new(QueryHistory::new()),
            analytics: Analytics::new(),
            persistence: None,
        }
    }

    /// Builder: hand history and analytics to this sink after submissions
    pub fn with_persistence(mut self, sink: Box<dyn PersistenceSink>) -> Self {
        self.persistence = Some(sink);
        self
    }

    // ========================================================================
    // Index lifecycle
    // ========================================================================

    /// Build and atomically publish a new index from a record snapshot
    pub fn rebuild_index(&self, records: Vec<ProductRecord>) {
        // Build outside the lock; publication is a pointer swap.
        let built = Arc::new(IndexBuilder::build(records));
        *self.index.write() = built;
        self.ready.store(true, Ordering::Release);
    }

    /// Load the catalog and rebuild, via the configured loader
    pub fn load_and_rebuild(&self) {
        let records = self.loader.load();
        self.rebuild_index(records);
    }

    /// Whether a first index has been published
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    fn ensure_ready(&self) {
        if !self.is_ready() {
            self.load_and_rebuild();
        }
    }

    fn current_index(&self) -> Arc<SearchIndex> {
        Arc::clone(&self.index.read())
    }

    // ========================================================================
    // Query-time surface
    // ========================================================================

    /// Ranked type-ahead suggestions for a query
    ///
    /// Does not write to history: only submissions are recorded, so partial
    /// keystroke input never floods it.
    pub fn get_suggestions(&self, query: &str) -> Vec<Candidate> {
        if query.trim().chars().count() < MIN_QUERY_LEN {
            // Short-circuit before the lazy load: short queries never touch
            // the index, so they must not trigger building one either.
            return vec![];
        }

        self.ensure_ready();
        let index = self.current_index();
        let history = self.history.lock().snapshot();

        let suggestions = findex_search::suggest(query, &index, &history);
        debug!(
            target: "findex::engine",
            query,
            suggestions = suggestions.len(),
            "suggestions served"
        );
        suggestions
    }

    /// Execute a submitted search
    ///
    /// Records the query into history and analytics; when nothing matches,
    /// derives alternative queries so the caller always has something to
    /// render.
    pub fn perform_search(&self, query: &str) -> SearchOutcome {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_LEN {
            // Defined no-op: no probing, no history write.
            return SearchOutcome::default();
        }

        self.ensure_ready();
        let index = self.current_index();
        let results = findex_search::search(trimmed, &index);

        self.history.lock().record(trimmed);
        self.analytics.record_search(trimmed, results.len());
        debug!(
            target: "findex::engine",
            query = trimmed,
            results = results.len(),
            "search executed"
        );

        let alternative_queries = if results.is_empty() {
            alternative_queries(trimmed)
        } else {
            vec![]
        };

        self.persist_best_effort();

        SearchOutcome {
            results,
            alternative_queries,
        }
    }

    /// Record a click on a served suggestion
    pub fn record_click(&self, suggestion: &str) {
        self.analytics.record_click(suggestion);
    }

    /// Hydrate a product candidate into its record
    pub fn product(&self, id: &ProductId) -> Option<ProductRecord> {
        self.current_index().record(id).cloned()
    }

    // ========================================================================
    // Inspection surface
    // ========================================================================

    /// Snapshot of the query history, oldest first
    pub fn get_history(&self) -> Vec<QueryHistoryEntry> {
        self.history.lock().snapshot()
    }

    /// Drop all history entries
    pub fn clear_history(&self) {
        self.history.lock().clear();
    }

    /// The analytics counters
    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    fn persist_best_effort(&self) {
        let Some(sink) = &self.persistence else {
            return;
        };

        let history = self.history.lock().snapshot();
        if let Err(e) = sink.persist_history(&history) {
            warn!(target: "findex::engine", error = %e, "history persistence failed");
        }
        if let Err(e) = sink.persist_analytics(&self.analytics.snapshot()) {
            warn!(target: "findex::engine", error = %e, "analytics persistence failed");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
