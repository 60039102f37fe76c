//! findex: multi-strategy in-memory product search & suggestion engine
//!
//! findex turns a raw user query string into ranked product matches and
//! ranked autocomplete suggestions. A catalog snapshot is loaded once (with
//! cache and built-in fallbacks), indexed into exact-term, substring and
//! fuzzy n-gram structures, and probed per keystroke or submission by a
//! multi-source candidate generator.
//!
//! # Quick start
//!
//! ```no_run
//! use findex::{CatalogConfig, CatalogLoader, FileCacheSource, HttpCatalogSource, SearchEngine};
//!
//! let cache = FileCacheSource::new("/tmp/findex-snapshot.json");
//! let http = HttpCatalogSource::new(CatalogConfig::from_env()).expect("client");
//! let loader = CatalogLoader::new(Box::new(http))
//!     .with_fallback(Box::new(cache.clone()))
//!     .with_snapshot_store(cache);
//!
//! let engine = SearchEngine::new(loader);
//!
//! // Type-ahead (debounced by the caller):
//! let suggestions = engine.get_suggestions("ipho");
//!
//! // Submission:
//! let outcome = engine.perform_search("iphone");
//! for product in &outcome.results {
//!     println!("{}: {}", product.name, product.price);
//! }
//! ```

pub use findex_catalog::{
    builtin_records, CatalogConfig, CatalogLoader, CatalogSource, FileCacheSource,
    HttpCatalogSource,
};
pub use findex_core::{
    limits, Candidate, CandidateSource, Error, FieldClass, MatchKind, ProductId, ProductRecord,
    QueryHistoryEntry, Result, SearchOutcome,
};
pub use findex_engine::{
    Analytics, AnalyticsSnapshot, MemorySink, PersistenceSink, QueryHistory, SearchEngine,
};
pub use findex_search::{search, suggest, IndexBuilder, SearchIndex};
