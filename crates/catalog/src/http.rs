//! Paginated HTTP catalog source
//!
//! Fetches the product snapshot from the remote product service as a
//! sequence of JSON array pages. The client is deliberately synchronous:
//! the engine performs its only I/O before the index is published, never
//! mid-query.

use crate::source::CatalogSource;
use findex_core::limits::DEFAULT_PAGE_SIZE;
use findex_core::{Error, ProductRecord, Result};
use std::time::Duration;

/// Hard ceiling on pages fetched per snapshot, so a collaborator that keeps
/// returning full pages cannot loop the loader forever.
const MAX_PAGES: usize = 50;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// CatalogConfig
// ============================================================================

/// Configuration for the HTTP catalog collaborator
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Endpoint returning JSON arrays of product records
    pub endpoint: String,

    /// Records requested per page
    pub page_size: usize,

    /// Request timeout
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            endpoint: "http://localhost:8080/products".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CatalogConfig {
    /// Config for an endpoint, with default page size and timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        CatalogConfig {
            endpoint: endpoint.into(),
            ..CatalogConfig::default()
        }
    }

    /// Config from the environment
    ///
    /// Reads `FINDEX_CATALOG_URL`; falls back to the default endpoint when
    /// unset.
    pub fn from_env() -> Self {
        match std::env::var("FINDEX_CATALOG_URL") {
            Ok(endpoint) => CatalogConfig::new(endpoint),
            Err(_) => CatalogConfig::default(),
        }
    }

    /// Builder: set page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Builder: set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ============================================================================
// HttpCatalogSource
// ============================================================================

/// Catalog source backed by the remote product service
pub struct HttpCatalogSource {
    config: CatalogConfig,
    http: reqwest::blocking::Client,
}

impl HttpCatalogSource {
    /// Create a source for the configured endpoint
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::catalog("http", e.to_string()))?;

        Ok(HttpCatalogSource { config, http })
    }

    fn fetch_page(&self, page: usize) -> Result<Vec<ProductRecord>> {
        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("page", page.to_string()),
                ("page_size", self.config.page_size.to_string()),
            ])
            .send()
            .map_err(|e| Error::catalog("http", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::catalog(
                "http",
                format!("status {} from {}", status, self.config.endpoint),
            ));
        }

        response
            .json::<Vec<ProductRecord>>()
            .map_err(|e| Error::MalformedPayload(e.to_string()))
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch(&self) -> Result<Vec<ProductRecord>> {
        let mut records = Vec::new();

        for page in 1..=MAX_PAGES {
            let batch = self.fetch_page(page)?;
            let batch_len = batch.len();
            records.extend(batch);

            if batch_len < self.config.page_size {
                return Ok(records);
            }
        }

        tracing::warn!(
            target: "findex::catalog",
            pages = MAX_PAGES,
            records = records.len(),
            "catalog pagination ceiling reached, snapshot may be truncated"
        );
        Ok(records)
    }

    fn name(&self) -> &str {
        "http"
    }
}
