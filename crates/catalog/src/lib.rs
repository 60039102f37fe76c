//! Catalog snapshot loading for findex
//!
//! This crate provides:
//! - CatalogSource trait: the read-only catalog collaborator boundary
//! - HttpCatalogSource: paginated fetch from the remote product service
//! - FileCacheSource: local JSON snapshot cache
//! - CatalogLoader: never-failing load with fallback chain
//!
//! Indexing is a separate step; loading has no side effect beyond the
//! returned snapshot (and the best-effort cache write).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod http;
pub mod loader;
pub mod source;

pub use cache::FileCacheSource;
pub use http::{CatalogConfig, HttpCatalogSource};
pub use loader::CatalogLoader;
pub use source::{builtin_records, CatalogSource};
