//! Search index built from a catalog snapshot
//!
//! This module provides:
//! - TermMap: ordered token -> product-id-set mapping with prefix scans
//! - SearchIndex: four field term maps plus the fuzzy n-gram map
//! - IndexBuilder: single-pass construction from a record snapshot
//!
//! The index is built once per catalog snapshot and read-only afterward.
//! Ordered maps make every iteration order deterministic, which is what the
//! ranking tie-break contract leans on.

use crate::tokenizer::{ngrams, tokenize};
use findex_core::{FieldClass, ProductId, ProductRecord};
use std::collections::BTreeMap;
use tracing::info;

// ============================================================================
// TermMap
// ============================================================================

/// Ordered mapping from a normalized token to the products containing it
///
/// Id sets are duplicate-free and keep first-insertion order; insertion order
/// carries no meaning beyond determinism.
#[derive(Debug, Clone, Default)]
pub struct TermMap {
    map: BTreeMap<String, Vec<ProductId>>,
}

impl TermMap {
    /// Create an empty term map
    pub fn new() -> Self {
        TermMap {
            map: BTreeMap::new(),
        }
    }

    /// Add a product under a token (idempotent)
    pub fn add(&mut self, token: &str, id: &ProductId) {
        let ids = self.map.entry(token.to_string()).or_default();
        if !ids.contains(id) {
            ids.push(id.clone());
        }
    }

    /// Products recorded under a token
    pub fn get(&self, token: &str) -> &[ProductId] {
        self.map.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All tokens sharing a prefix, with their products, in token order
    pub fn scan_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [ProductId])> {
        self.map
            .range(prefix.to_string()..)
            .take_while(move |(token, _)| token.starts_with(prefix))
            .map(|(token, ids)| (token.as_str(), ids.as_slice()))
    }

    /// All tokens with their products, in token order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ProductId])> {
        self.map
            .iter()
            .map(|(token, ids)| (token.as_str(), ids.as_slice()))
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check whether the map holds no tokens
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// ============================================================================
// SearchIndex
// ============================================================================

/// Aggregate index over one catalog snapshot
///
/// Holds one term map per field class, the fuzzy n-gram map, the record
/// store used to hydrate results, and the distinct category labels for
/// category-browse suggestions.
///
/// # Thread Safety
///
/// Immutable after build; share behind an `Arc` and read freely. A catalog
/// refresh builds a new index and publishes it whole.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    by_name: TermMap,
    by_category: TermMap,
    by_tag: TermMap,
    by_description: TermMap,
    fuzzy: TermMap,
    records: BTreeMap<ProductId, ProductRecord>,
    categories: Vec<String>,
}

impl SearchIndex {
    /// An index over no records; every probe misses
    pub fn empty() -> Self {
        SearchIndex::default()
    }

    /// The term map for a field class
    pub fn field(&self, class: FieldClass) -> &TermMap {
        match class {
            FieldClass::Name => &self.by_name,
            FieldClass::Category => &self.by_category,
            FieldClass::Tag => &self.by_tag,
            FieldClass::Description => &self.by_description,
        }
    }

    /// The fuzzy n-gram map
    pub fn fuzzy(&self) -> &TermMap {
        &self.fuzzy
    }

    /// Look up a record by id
    pub fn record(&self, id: &ProductId) -> Option<&ProductRecord> {
        self.records.get(id)
    }

    /// Number of indexed records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Check whether the index holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct category labels, in first-seen order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

// ============================================================================
// IndexBuilder
// ============================================================================

/// Single-pass index construction
///
/// Safe to call repeatedly; each call produces an independent index. The
/// caller is responsible for publishing the result atomically; a partially
/// built index is never observable because it is never shared.
pub struct IndexBuilder;

impl IndexBuilder {
    /// Build a search index from a catalog snapshot
    ///
    /// Duplicate records (same id) in the snapshot are tolerated: term adds
    /// are idempotent and the first record wins the record store.
    pub fn build(records: Vec<ProductRecord>) -> SearchIndex {
        let mut index = SearchIndex::empty();

        for record in records {
            let id = record.id.clone();

            for token in tokenize(&record.name) {
                index.by_name.add(&token, &id);
            }
            for token in tokenize(&record.category) {
                index.by_category.add(&token, &id);
            }
            for tag in &record.tags {
                for token in tokenize(tag) {
                    index.by_tag.add(&token, &id);
                }
            }
            for token in tokenize(&record.description) {
                index.by_description.add(&token, &id);
            }

            for token in tokenize(&record.full_text()) {
                for gram in ngrams(&token) {
                    index.fuzzy.add(&gram, &id);
                }
            }

            let category = record.category.trim();
            if !category.is_empty()
                && !index
                    .categories
                    .iter()
                    .any(|c| c.eq_ignore_ascii_case(category))
            {
                index.categories.push(category.to_string());
            }

            index.records.entry(id).or_insert(record);
        }

        info!(
            target: "findex::index",
            records = index.records.len(),
            name_terms = index.by_name.len(),
            fuzzy_ngrams = index.fuzzy.len(),
            categories = index.categories.len(),
            "search index built"
        );

        index
    }
}

// ============================================================================
// Tests
// ============================================================================
