//! Catalog record and query-time types
//!
//! This module defines the data the engine indexes and returns:
//! - ProductId: opaque identifier assigned by the catalog collaborator
//! - ProductRecord: one catalog entry, immutable once indexed
//! - FieldClass: which indexed field a term was extracted from
//! - QueryHistoryEntry: one submitted query with its timestamp
//! - SearchOutcome: results plus alternative queries for a submission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ProductId
// ============================================================================

/// Opaque product identifier
///
/// Assigned by the catalog collaborator and never synthesized by the engine.
/// Treated as an opaque string: compared, hashed, and ordered, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap a catalog-supplied identifier
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    /// The raw identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        ProductId(s)
    }
}

// ============================================================================
// ProductRecord
// ============================================================================

/// One catalog entry
///
/// Records are immutable once indexed and are replaced wholesale when a new
/// catalog snapshot is loaded; there are no partial updates.
///
/// The serde shape matches the catalog collaborator's wire format. Unknown
/// fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Catalog-assigned identifier
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Category label
    #[serde(default)]
    pub category: String,

    /// Free-text tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Numeric price
    #[serde(default)]
    pub price: f64,

    /// Optional numeric rating
    #[serde(default)]
    pub rating: Option<f32>,
}

impl ProductRecord {
    /// Create a record with the required fields
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        ProductRecord {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            tags: vec![],
            description: String::new(),
            price: 0.0,
            rating: None,
        }
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder: set tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set price
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builder: set rating
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Concatenated searchable text of all indexed fields
    ///
    /// Used to feed the fuzzy n-gram index: name, category, tags and
    /// description joined by single spaces.
    pub fn full_text(&self) -> String {
        let mut text = String::with_capacity(
            self.name.len() + self.category.len() + self.description.len() + 16,
        );
        text.push_str(&self.name);
        text.push(' ');
        text.push_str(&self.category);
        for tag in &self.tags {
            text.push(' ');
            text.push_str(tag);
        }
        text.push(' ');
        text.push_str(&self.description);
        text
    }
}

// ============================================================================
// FieldClass
// ============================================================================

/// Which indexed field a term was extracted from
///
/// Each field class has its own term index so query strategies can weight
/// name matches differently from tag or description matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldClass {
    /// Product display name
    Name,
    /// Category label
    Category,
    /// Free-text tag
    Tag,
    /// Free-text description
    Description,
}

impl FieldClass {
    /// All field classes, in indexing order
    pub fn all() -> [FieldClass; 4] {
        [
            FieldClass::Name,
            FieldClass::Category,
            FieldClass::Tag,
            FieldClass::Description,
        ]
    }
}

// ============================================================================
// QueryHistoryEntry
// ============================================================================

/// One submitted query with its timestamp
///
/// History is append-only and capacity-bounded; entries are trimmed, never
/// edited. Only submitted queries are recorded, not per-keystroke input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryHistoryEntry {
    /// The submitted query text, as typed
    pub query: String,

    /// Submission time
    pub timestamp: DateTime<Utc>,
}

impl QueryHistoryEntry {
    /// Create an entry stamped with the current time
    pub fn now(query: impl Into<String>) -> Self {
        QueryHistoryEntry {
            query: query.into(),
            timestamp: Utc::now(),
        }
    }
}

// ============================================================================
// SearchOutcome
// ============================================================================

/// Result of a submitted search
///
/// When `results` is empty, `alternative_queries` carries up to five
/// suggested replacement queries so the caller always has something to
/// render.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Ranked product matches (highest score first)
    pub results: Vec<ProductRecord>,

    /// Alternative query strings, only populated when `results` is empty
    pub alternative_queries: Vec<String>,
}

impl SearchOutcome {
    /// Outcome with results and no alternatives
    pub fn with_results(results: Vec<ProductRecord>) -> Self {
        SearchOutcome {
            results,
            alternative_queries: vec![],
        }
    }

    /// Check whether the search matched nothing
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
