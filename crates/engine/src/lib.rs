//! Engine facade for findex
//!
//! This crate provides:
//! - SearchEngine: the public query-time surface (suggestions, search,
//!   history, analytics) over an atomically published index
//! - QueryHistory: capacity-bounded submitted-query history
//! - Analytics: per-query result counts and per-suggestion click counts
//! - PersistenceSink: best-effort hand-off boundary
//! - Alternative-query derivation for empty result sets

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alternatives;
pub mod analytics;
pub mod engine;
pub mod history;
pub mod persistence;

pub use alternatives::alternative_queries;
pub use analytics::{Analytics, AnalyticsSnapshot};
pub use engine::SearchEngine;
pub use history::QueryHistory;
pub use persistence::{MemorySink, PersistenceSink};
