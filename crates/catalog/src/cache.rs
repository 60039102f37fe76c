//! File-backed catalog cache
//!
//! A JSON file holding the last good snapshot. Read as a fallback source
//! when the remote service is unavailable; written best-effort after a
//! successful remote load.

use crate::source::CatalogSource;
use findex_core::{ProductRecord, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog source backed by a local JSON snapshot file
#[derive(Debug, Clone)]
pub struct FileCacheSource {
    path: PathBuf,
}

impl FileCacheSource {
    /// Cache at the given path; the file need not exist yet
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileCacheSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The cache file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a snapshot to the cache file
    ///
    /// Callers treat this as best-effort; the loader logs failures and moves
    /// on.
    pub fn store(&self, records: &[ProductRecord]) -> Result<()> {
        let payload = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

impl CatalogSource for FileCacheSource {
    fn fetch(&self) -> Result<Vec<ProductRecord>> {
        let payload = fs::read_to_string(&self.path)?;
        let records = serde_json::from_str(&payload)?;
        Ok(records)
    }

    fn name(&self) -> &str {
        "file-cache"
    }
}
