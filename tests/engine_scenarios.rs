//! End-to-end engine scenarios
//!
//! Exercises the full public surface the way a presentation layer would:
//! catalog load, type-ahead suggestions, submitted searches, history and
//! alternative queries.

use findex::{
    CatalogLoader, CatalogSource, MatchKind, ProductRecord, Result, SearchEngine,
};

// ============================================================================
// Test Helpers
// ============================================================================

struct StaticSource(Vec<ProductRecord>);

impl CatalogSource for StaticSource {
    fn fetch(&self) -> Result<Vec<ProductRecord>> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

fn catalog() -> Vec<ProductRecord> {
    vec![ProductRecord::new("p1", "iPhone 15 Pro")
        .with_category("Electronics")
        .with_price(999.0)]
}

fn engine() -> SearchEngine {
    SearchEngine::new(CatalogLoader::new(Box::new(StaticSource(catalog()))))
}

// ============================================================================
// Submitted-query scenarios
// ============================================================================

/// A whole word of an indexed name matches exactly
#[test]
fn test_whole_name_word_matches_exactly() {
    let engine = engine();
    let outcome = engine.perform_search("iphone");

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].name, "iPhone 15 Pro");
    assert!(outcome.alternative_queries.is_empty());

    let suggestions = engine.get_suggestions("iphone");
    let product = suggestions.iter().find(|c| c.is_product()).unwrap();
    assert_eq!(product.kind, MatchKind::ExactName);
    assert_eq!(product.score, 10);
}

/// A typo still surfaces the record through the fuzzy strategy
#[test]
fn test_typo_matches_fuzzily() {
    let engine = engine();
    let outcome = engine.perform_search("ifone");

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].id.as_str(), "p1");

    let suggestions = engine.get_suggestions("ifone");
    let product = suggestions.iter().find(|c| c.is_product()).unwrap();
    assert_eq!(product.kind, MatchKind::Fuzzy);
    assert_eq!(product.score, 3);
}

/// Exact matches rank ahead of fuzzy matches when both exist
#[test]
fn test_exact_ranks_ahead_of_fuzzy() {
    let records = vec![
        ProductRecord::new("exact", "phone stand").with_category("Accessories"),
        // Shares n-grams with "phone" but no token prefix/substring overlap
        // strong enough to beat an exact hit.
        ProductRecord::new("fuzzy", "telephono adapter").with_category("Accessories"),
    ];
    let engine = SearchEngine::new(CatalogLoader::new(Box::new(StaticSource(records))));

    let results = engine.perform_search("phone").results;
    assert_eq!(results[0].id.as_str(), "exact");
}

/// A hopeless query yields no results but at least one alternative
#[test]
fn test_no_match_offers_alternatives() {
    let engine = engine();
    let outcome = engine.perform_search("xyz123");

    assert!(outcome.results.is_empty());
    assert!(!outcome.alternative_queries.is_empty());
    assert!(outcome.alternative_queries.len() <= 5);
}

/// The empty query is a no-op: no suggestions, no history write
#[test]
fn test_empty_query_is_noop() {
    let engine = engine();

    assert!(engine.get_suggestions("").is_empty());
    let outcome = engine.perform_search("");
    assert!(outcome.results.is_empty());
    assert!(engine.get_history().is_empty());
}

// ============================================================================
// History scenarios
// ============================================================================

/// Submissions are timestamped into history; the cap holds under load
#[test]
fn test_history_records_submissions_and_caps() {
    let engine = engine();

    engine.perform_search("iphone");
    let history = engine.get_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].query, "iphone");
    // Timestamp is present and sane.
    assert!(history[0].timestamp <= chrono::Utc::now());

    for i in 0..100 {
        engine.perform_search(format!("query number {i}").as_str());
    }
    assert!(engine.get_history().len() <= 50);
    assert_eq!(engine.get_history().len(), 50);
}

/// Keystroke suggestions never write history
#[test]
fn test_suggestions_do_not_write_history() {
    let engine = engine();
    for prefix in ["ip", "iph", "ipho", "iphon"] {
        engine.get_suggestions(prefix);
    }
    assert!(engine.get_history().is_empty());
}

/// Recent submissions surface as history suggestions
#[test]
fn test_recent_submission_suggested_back() {
    let engine = engine();
    engine.perform_search("iphone charger");

    let suggestions = engine.get_suggestions("iphone");
    assert!(suggestions.iter().any(|c| {
        c.kind == MatchKind::History && c.source.suggestion_text() == Some("iphone charger")
    }));
}

// ============================================================================
// Suggestion contract
// ============================================================================

/// Suggestions are capped at eight even over a crowded catalog
#[test]
fn test_suggestion_cap() {
    let records: Vec<ProductRecord> = (0..30)
        .map(|i| ProductRecord::new(format!("p{i}"), format!("Gadget {i:02}")))
        .collect();
    let engine = SearchEngine::new(CatalogLoader::new(Box::new(StaticSource(records))));

    assert!(engine.get_suggestions("gadget").len() <= 8);
}

/// Search results are a superset of suggest's product candidates
#[test]
fn test_search_contains_suggested_products() {
    let engine = engine();

    let suggested: Vec<String> = engine
        .get_suggestions("iphone")
        .iter()
        .filter_map(|c| c.source.product_id())
        .map(|id| id.to_string())
        .collect();
    let searched: Vec<String> = engine
        .perform_search("iphone")
        .results
        .iter()
        .map(|r| r.id.to_string())
        .collect();

    for id in suggested {
        assert!(searched.contains(&id), "suggested product {id} missing from search");
    }
}
