//! Core types for the findex product search engine
//!
//! This crate defines the foundational types used throughout the system:
//! - ProductId, ProductRecord: the catalog data model
//! - FieldClass: discriminates indexed field term maps
//! - Candidate, CandidateSource, MatchKind: transient query-time matches
//! - QueryHistoryEntry, SearchOutcome: submission-time types
//! - Error: error type hierarchy
//! - limits: tuning constants

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod candidate;
pub mod error;
pub mod limits;
pub mod types;

// Re-export commonly used types
pub use candidate::{Candidate, CandidateSource, MatchKind};
pub use error::{Error, Result};
pub use types::{FieldClass, ProductId, ProductRecord, QueryHistoryEntry, SearchOutcome};
