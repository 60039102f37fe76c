//! Never-failing catalog snapshot loader
//!
//! The loader owns the fallback chain: primary source, optional secondary
//! source, then the built-in record set. `load` always returns a snapshot;
//! the failure mode is a smaller or emptier catalog, never an error.

use crate::cache::FileCacheSource;
use crate::source::{builtin_records, CatalogSource};
use findex_core::ProductRecord;
use tracing::{info, warn};

/// Catalog loader with a primary source and fallback chain
pub struct CatalogLoader {
    primary: Box<dyn CatalogSource>,
    secondary: Option<Box<dyn CatalogSource>>,
    snapshot_store: Option<FileCacheSource>,
}

impl CatalogLoader {
    /// Loader over a single primary source
    pub fn new(primary: Box<dyn CatalogSource>) -> Self {
        CatalogLoader {
            primary,
            secondary: None,
            snapshot_store: None,
        }
    }

    /// Builder: set the fallback source tried when the primary fails
    pub fn with_fallback(mut self, secondary: Box<dyn CatalogSource>) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// Builder: cache successful primary snapshots to this file
    pub fn with_snapshot_store(mut self, store: FileCacheSource) -> Self {
        self.snapshot_store = Some(store);
        self
    }

    /// Load the current catalog snapshot
    ///
    /// Never fails. An empty snapshot from a source is a successful
    /// (degenerate) load, not a trigger for fallback.
    pub fn load(&self) -> Vec<ProductRecord> {
        match self.primary.fetch() {
            Ok(records) => {
                info!(
                    target: "findex::catalog",
                    source = self.primary.name(),
                    records = records.len(),
                    "catalog snapshot loaded"
                );
                self.store_snapshot(&records);
                return records;
            }
            Err(e) => {
                warn!(
                    target: "findex::catalog",
                    source = self.primary.name(),
                    error = %e,
                    "primary catalog source failed"
                );
            }
        }

        if let Some(secondary) = &self.secondary {
            match secondary.fetch() {
                Ok(records) => {
                    info!(
                        target: "findex::catalog",
                        source = secondary.name(),
                        records = records.len(),
                        "catalog snapshot loaded from fallback"
                    );
                    return records;
                }
                Err(e) => {
                    warn!(
                        target: "findex::catalog",
                        source = secondary.name(),
                        error = %e,
                        "fallback catalog source failed"
                    );
                }
            }
        }

        let records = builtin_records();
        warn!(
            target: "findex::catalog",
            records = records.len(),
            "all catalog sources failed, using built-in record set"
        );
        records
    }

    fn store_snapshot(&self, records: &[ProductRecord]) {
        let Some(store) = &self.snapshot_store else {
            return;
        };
        if let Err(e) = store.store(records) {
            warn!(
                target: "findex::catalog",
                path = %store.path().display(),
                error = %e,
                "failed to cache catalog snapshot"
            );
        }
    }
}
