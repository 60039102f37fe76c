//! Indexing and candidate generation for findex
//!
//! This crate provides:
//! - Tokenizer (whitespace tokens and fuzzy n-grams)
//! - SearchIndex and its single-pass IndexBuilder
//! - Multi-strategy candidate generation (prefix, substring, fuzzy,
//!   history/trending/category suggestions)
//! - Score-based merging, de-duplication and ranking
//!
//! # Usage
//!
//! ```
//! use findex_core::ProductRecord;
//! use findex_search::{suggest, search, IndexBuilder};
//!
//! let index = IndexBuilder::build(vec![
//!     ProductRecord::new("p1", "iPhone 15 Pro").with_category("Electronics"),
//! ]);
//! let results = search("iphone", &index);
//! assert_eq!(results[0].name, "iPhone 15 Pro");
//! let suggestions = suggest("iph", &index, &[]);
//! assert!(!suggestions.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
mod probe;
pub mod rank;
pub mod tokenizer;
pub mod trending;

use findex_core::limits::{MIN_QUERY_LEN, SUGGESTION_LIMIT};
use findex_core::{Candidate, ProductRecord, QueryHistoryEntry};

// Re-export commonly used types
pub use index::{IndexBuilder, SearchIndex, TermMap};
pub use rank::merge_and_rank;
pub use tokenizer::{ngrams, tokenize, tokenize_unique};

/// Normalize a raw query: trim and lower-case
///
/// Returns `None` for queries below the minimum length, which short-circuit
/// to empty results without touching any index.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Ranked type-ahead suggestions for a query, capped at eight entries
///
/// Runs every strategy: index-backed product matches plus history, trending
/// and category-browse suggestions. Sub-minimum-length queries yield an
/// empty list without probing the index.
pub fn suggest(
    query: &str,
    index: &SearchIndex,
    history: &[QueryHistoryEntry],
) -> Vec<Candidate> {
    let Some(query) = normalize_query(query) else {
        return vec![];
    };

    let mut candidates = probe::product_candidates(&query, index);
    candidates.extend(probe::contextual_candidates(&query, index, history));

    let mut ranked = merge_and_rank(candidates);
    ranked.truncate(SUGGESTION_LIMIT);
    ranked
}

/// Ranked product results for a submitted query, uncapped
///
/// Product strategies only (prefix, substring, fuzzy); callers paginate.
/// The result set is a superset of the product candidates `suggest` would
/// return for the same query.
pub fn search(query: &str, index: &SearchIndex) -> Vec<ProductRecord> {
    let Some(query) = normalize_query(query) else {
        return vec![];
    };

    merge_and_rank(probe::product_candidates(&query, index))
        .iter()
        .filter_map(|candidate| candidate.source.product_id())
        .filter_map(|id| index.record(id).cloned())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use findex_core::{MatchKind, ProductRecord};

    fn sample_index() -> SearchIndex {
        IndexBuilder::build(vec![
            ProductRecord::new("p1", "iPhone 15 Pro")
                .with_category("Electronics")
                .with_tags(vec!["smartphone".into(), "apple".into()])
                .with_description("Flagship smartphone")
                .with_price(999.0),
            ProductRecord::new("p2", "Smartphone Case")
                .with_category("Accessories")
                .with_tags(vec!["iphone".into()]),
            ProductRecord::new("p3", "Espresso Machine")
                .with_category("Kitchen")
                .with_tags(vec!["coffee".into()]),
        ])
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  iPhone "), Some("iphone".to_string()));
        assert_eq!(normalize_query("ab"), Some("ab".to_string()));
        assert_eq!(normalize_query("a"), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(""), None);
    }

    #[test]
    fn test_search_exact_name() {
        let index = sample_index();
        let results = search("iphone", &index);

        assert_eq!(results[0].id.as_str(), "p1");
    }

    #[test]
    fn test_search_ranks_exact_above_fuzzy() {
        let index = sample_index();
        // "iphone" exact-matches p1's name and substring-matches p2's tag;
        // p1 must rank first.
        let results = search("iphone", &index);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids[0], "p1");
        assert!(ids.contains(&"p2"));
    }

    #[test]
    fn test_search_typo_hits_fuzzy() {
        let index = sample_index();
        let results = search("ifone", &index);
        assert!(results.iter().any(|r| r.id.as_str() == "p1"));
    }

    #[test]
    fn test_search_no_match_empty() {
        let index = sample_index();
        assert!(search("xyz123", &index).is_empty());
    }

    #[test]
    fn test_short_query_skips_index() {
        let index = sample_index();
        assert!(search("i", &index).is_empty());
        assert!(suggest("i", &index, &[]).is_empty());
        assert!(search("", &index).is_empty());
        assert!(suggest("", &index, &[]).is_empty());
    }

    #[test]
    fn test_suggest_capped_at_limit() {
        let records: Vec<ProductRecord> = (0..20)
            .map(|i| ProductRecord::new(format!("p{i}"), format!("Widget {i:02}")))
            .collect();
        let index = IndexBuilder::build(records);

        let suggestions = suggest("widget", &index, &[]);
        assert!(suggestions.len() <= 8);
    }

    #[test]
    fn test_suggest_includes_contextual_sources() {
        let index = sample_index();
        let history = vec![QueryHistoryEntry::now("espresso beans")];

        let suggestions = suggest("espresso", &index, &history);

        assert!(suggestions.iter().any(|c| c.kind == MatchKind::History));
        assert!(suggestions.iter().any(|c| c.kind == MatchKind::Trending));
        assert!(suggestions.iter().any(|c| c.is_product()));
    }

    #[test]
    fn test_search_is_superset_of_suggest_products() {
        let index = sample_index();

        let suggested_products: Vec<String> = suggest("iphone", &index, &[])
            .iter()
            .filter_map(|c| c.source.product_id())
            .map(|id| id.as_str().to_string())
            .collect();
        let searched: Vec<String> = search("iphone", &index)
            .iter()
            .map(|r| r.id.as_str().to_string())
            .collect();

        for id in suggested_products {
            assert!(searched.contains(&id));
        }
    }

    #[test]
    fn test_search_deterministic_across_rebuilds() {
        let a = sample_index();
        let b = sample_index();

        for query in ["iphone", "smart", "coffee", "ifone"] {
            let ra: Vec<&str> = search(query, &a).iter().map(|r| r.id.as_str()).collect();
            let rb: Vec<&str> = search(query, &b).iter().map(|r| r.id.as_str()).collect();
            let ra2: Vec<&str> = search(query, &a).iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ra, rb, "rebuild changed ordering for {query}");
            assert_eq!(ra, ra2, "repeat query changed ordering for {query}");
        }
    }
}
