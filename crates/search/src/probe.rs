//! Candidate generation strategies
//!
//! Each probe walks one index structure (or auxiliary source) and emits
//! candidates in a deterministic discovery order. Strategy priority is
//! expressed by emission order; relative relevance by the match-kind
//! weights.

use crate::index::SearchIndex;
use crate::tokenizer::{ngrams, tokenize};
use crate::trending::trending_terms;
use findex_core::{Candidate, FieldClass, MatchKind, QueryHistoryEntry};

/// Product candidates from the three index-backed strategies
///
/// `query` must already be normalized (trimmed, lower-cased, length-checked).
pub(crate) fn product_candidates(query: &str, index: &SearchIndex) -> Vec<Candidate> {
    let mut out = Vec::new();

    // 1. Exact/prefix: tokens starting with the query.
    for (_, ids) in index.field(FieldClass::Name).scan_prefix(query) {
        for id in ids {
            out.push(Candidate::product(id.clone(), MatchKind::ExactName));
        }
    }
    for (_, ids) in index.field(FieldClass::Category).scan_prefix(query) {
        for id in ids {
            out.push(Candidate::product(id.clone(), MatchKind::CategoryName));
        }
    }

    // 2. Partial/substring: tokens merely containing the query.
    for (token, ids) in index.field(FieldClass::Name).iter() {
        if token.contains(query) && !token.starts_with(query) {
            for id in ids {
                out.push(Candidate::product(id.clone(), MatchKind::PartialName));
            }
        }
    }
    for (token, ids) in index.field(FieldClass::Tag).iter() {
        if token.contains(query) {
            for id in ids {
                out.push(Candidate::product(id.clone(), MatchKind::TagMatch));
            }
        }
    }

    // 3. Fuzzy: any record sharing an n-gram with the query.
    for token in tokenize(query) {
        for gram in ngrams(&token) {
            for id in index.fuzzy().get(&gram) {
                out.push(Candidate::product(id.clone(), MatchKind::Fuzzy));
            }
        }
    }

    out
}

/// Suggestion candidates from the auxiliary, non-product sources
///
/// History is probed most-recent-first so equal-scored history suggestions
/// favor recency.
pub(crate) fn contextual_candidates(
    query: &str,
    index: &SearchIndex,
    history: &[QueryHistoryEntry],
) -> Vec<Candidate> {
    let mut out = Vec::new();

    for entry in history.iter().rev() {
        if entry.query.to_lowercase().contains(query) {
            out.push(Candidate::suggestion(
                entry.query.clone(),
                MatchKind::History,
            ));
        }
    }

    for term in trending_terms() {
        if term.contains(query) {
            out.push(Candidate::suggestion(*term, MatchKind::Trending));
        }
    }

    for category in index.categories() {
        if category.to_lowercase().contains(query) {
            out.push(Candidate::suggestion(
                category.clone(),
                MatchKind::CategoryBrowse,
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexBuilder;
    use findex_core::{CandidateSource, ProductId, ProductRecord};

    fn sample_index() -> SearchIndex {
        IndexBuilder::build(vec![
            ProductRecord::new("p1", "iPhone 15 Pro")
                .with_category("Electronics")
                .with_tags(vec!["smartphone".into()])
                .with_description("Flagship smartphone"),
            ProductRecord::new("p2", "Smartphone Case")
                .with_category("Accessories")
                .with_tags(vec!["iphone".into(), "protection".into()]),
        ])
    }

    fn kinds_for(candidates: &[Candidate], id: &str) -> Vec<MatchKind> {
        candidates
            .iter()
            .filter(|c| c.source.product_id().map(ProductId::as_str) == Some(id))
            .map(|c| c.kind)
            .collect()
    }

    #[test]
    fn test_name_prefix_match() {
        let index = sample_index();
        let candidates = product_candidates("iphone", &index);
        assert!(kinds_for(&candidates, "p1").contains(&MatchKind::ExactName));
    }

    #[test]
    fn test_category_prefix_match() {
        let index = sample_index();
        let candidates = product_candidates("elec", &index);
        assert!(kinds_for(&candidates, "p1").contains(&MatchKind::CategoryName));
        assert!(!kinds_for(&candidates, "p1").contains(&MatchKind::ExactName));
    }

    #[test]
    fn test_partial_name_excludes_prefix_hits() {
        let index = sample_index();
        // "phone" is inside "iphone" and "smartphone" but prefixes neither
        // name token of p1; p2's name token "smartphone" contains it too.
        let candidates = product_candidates("phone", &index);
        assert!(kinds_for(&candidates, "p1").contains(&MatchKind::PartialName));
        assert!(kinds_for(&candidates, "p2").contains(&MatchKind::PartialName));
        assert!(!kinds_for(&candidates, "p1").contains(&MatchKind::ExactName));
    }

    #[test]
    fn test_tag_substring_match() {
        let index = sample_index();
        let candidates = product_candidates("protect", &index);
        assert!(kinds_for(&candidates, "p2").contains(&MatchKind::TagMatch));
        assert!(!kinds_for(&candidates, "p2").contains(&MatchKind::PartialName));
    }

    #[test]
    fn test_fuzzy_match_on_typo() {
        let index = sample_index();
        // "ifone" shares the n-gram "one" with "iphone".
        let candidates = product_candidates("ifone", &index);
        assert!(kinds_for(&candidates, "p1").contains(&MatchKind::Fuzzy));
    }

    #[test]
    fn test_no_match_yields_nothing() {
        let index = sample_index();
        assert!(product_candidates("zzz", &index).is_empty());
    }

    #[test]
    fn test_history_candidates_most_recent_first() {
        let index = sample_index();
        let history = vec![
            QueryHistoryEntry::now("iphone case"),
            QueryHistoryEntry::now("iphone charger"),
        ];

        let candidates = contextual_candidates("iphone", &index, &history);
        let history_texts: Vec<&str> = candidates
            .iter()
            .filter(|c| c.kind == MatchKind::History)
            .filter_map(|c| c.source.suggestion_text())
            .collect();

        assert_eq!(history_texts, vec!["iphone charger", "iphone case"]);
    }

    #[test]
    fn test_category_browse_candidates() {
        let index = sample_index();
        let candidates = contextual_candidates("access", &index, &[]);

        let browse: Vec<&str> = candidates
            .iter()
            .filter(|c| c.kind == MatchKind::CategoryBrowse)
            .filter_map(|c| c.source.suggestion_text())
            .collect();
        assert_eq!(browse, vec!["Accessories"]);
    }

    #[test]
    fn test_trending_candidates() {
        let index = sample_index();
        let candidates = contextual_candidates("head", &index, &[]);
        assert!(candidates
            .iter()
            .any(|c| c.kind == MatchKind::Trending
                && matches!(&c.source, CandidateSource::Suggestion(s) if s.contains("head"))));
    }
}
