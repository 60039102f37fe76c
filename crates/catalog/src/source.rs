//! Catalog source boundary
//!
//! A catalog source is anything that can produce a full product snapshot:
//! the remote product service, a local cache file, or the built-in fallback
//! set. Sources are read-only from the engine's perspective.

use findex_core::{ProductRecord, Result};
use once_cell::sync::Lazy;

/// A collaborator that can produce a catalog snapshot
///
/// `fetch` returns the complete record set or an error; partial snapshots
/// are not a concept at this boundary. Fallback policy lives in the loader,
/// not in sources.
pub trait CatalogSource: Send + Sync {
    /// Fetch the full catalog snapshot
    fn fetch(&self) -> Result<Vec<ProductRecord>>;

    /// Source name for logging ("http", "file-cache", ...)
    fn name(&self) -> &str;
}

/// Built-in minimal record set
///
/// Used when every configured source has failed, so the engine stays
/// queryable in a degraded state.
static BUILTIN_RECORDS: Lazy<Vec<ProductRecord>> = Lazy::new(|| {
    vec![
        ProductRecord::new("builtin-1", "iPhone 15 Pro")
            .with_category("Electronics")
            .with_tags(vec!["smartphone".into(), "apple".into()])
            .with_description("Flagship smartphone with titanium body")
            .with_price(999.0)
            .with_rating(4.8),
        ProductRecord::new("builtin-2", "Wireless Headphones")
            .with_category("Electronics")
            .with_tags(vec!["audio".into(), "bluetooth".into()])
            .with_description("Over-ear noise cancelling headphones")
            .with_price(199.0)
            .with_rating(4.5),
        ProductRecord::new("builtin-3", "Espresso Machine")
            .with_category("Kitchen")
            .with_tags(vec!["coffee".into(), "appliance".into()])
            .with_description("Compact espresso maker with milk frother")
            .with_price(249.0)
            .with_rating(4.2),
        ProductRecord::new("builtin-4", "Running Shoes")
            .with_category("Sports")
            .with_tags(vec!["footwear".into(), "running".into()])
            .with_description("Lightweight cushioned road running shoes")
            .with_price(129.0)
            .with_rating(4.6),
        ProductRecord::new("builtin-5", "Desk Lamp")
            .with_category("Home")
            .with_tags(vec!["lighting".into(), "office".into()])
            .with_description("Adjustable warm LED desk lamp")
            .with_price(39.0),
    ]
});

/// Clone of the built-in fallback record set
pub fn builtin_records() -> Vec<ProductRecord> {
    BUILTIN_RECORDS.clone()
}
