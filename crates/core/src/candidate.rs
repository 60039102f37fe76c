//! Transient query-time candidate types
//!
//! This module defines:
//! - MatchKind: which strategy produced a candidate, with its score weight
//! - CandidateSource: a product reference or a plain suggestion string
//! - Candidate: one scored match, produced and discarded per query
//!
//! Candidates are never persisted; they exist only between candidate
//! generation and result compilation.

use crate::types::ProductId;

// ============================================================================
// MatchKind
// ============================================================================

/// The strategy that produced a candidate
///
/// The weight ordering is contractual: exact > partial > fuzzy for product
/// matches, history > trending > category-browse for suggestion matches.
/// The absolute values are tuning constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// A name token starts with the query
    ExactName,
    /// A category token starts with the query
    CategoryName,
    /// A name token contains, but does not start with, the query
    PartialName,
    /// A tag token contains the query
    TagMatch,
    /// The record shares at least one n-gram with the query
    Fuzzy,
    /// A recent history entry contains the query
    History,
    /// A trending term contains the query
    Trending,
    /// A category label contains the query
    CategoryBrowse,
}

impl MatchKind {
    /// Score weight for this match kind
    pub fn weight(self) -> u32 {
        match self {
            MatchKind::ExactName => 10,
            MatchKind::CategoryName => 8,
            MatchKind::PartialName => 6,
            MatchKind::TagMatch => 5,
            MatchKind::Fuzzy => 3,
            MatchKind::History => 4,
            MatchKind::Trending => 3,
            MatchKind::CategoryBrowse => 2,
        }
    }

    /// Whether this kind refers to a product rather than a plain suggestion
    pub fn is_product(self) -> bool {
        matches!(
            self,
            MatchKind::ExactName
                | MatchKind::CategoryName
                | MatchKind::PartialName
                | MatchKind::TagMatch
                | MatchKind::Fuzzy
        )
    }

    /// Stable name for logging
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::ExactName => "exact-name",
            MatchKind::CategoryName => "category-name",
            MatchKind::PartialName => "partial-name",
            MatchKind::TagMatch => "tag-match",
            MatchKind::Fuzzy => "fuzzy",
            MatchKind::History => "history",
            MatchKind::Trending => "trending",
            MatchKind::CategoryBrowse => "category-browse",
        }
    }
}

// ============================================================================
// CandidateSource
// ============================================================================

/// What a candidate points at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    /// A product in the current catalog snapshot
    Product(ProductId),
    /// A plain suggestion string (history, trending, category browse)
    Suggestion(String),
}

impl CandidateSource {
    /// The product id, if this is a product candidate
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            CandidateSource::Product(id) => Some(id),
            CandidateSource::Suggestion(_) => None,
        }
    }

    /// The suggestion text, if this is a suggestion candidate
    pub fn suggestion_text(&self) -> Option<&str> {
        match self {
            CandidateSource::Product(_) => None,
            CandidateSource::Suggestion(text) => Some(text),
        }
    }
}

// ============================================================================
// Candidate
// ============================================================================

/// One scored match produced during query processing
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// What this candidate points at
    pub source: CandidateSource,

    /// The strategy that produced it
    pub kind: MatchKind,

    /// Score (higher = more relevant); copied from the kind's weight
    pub score: u32,
}

impl Candidate {
    /// Create a product candidate
    pub fn product(id: ProductId, kind: MatchKind) -> Self {
        Candidate {
            source: CandidateSource::Product(id),
            kind,
            score: kind.weight(),
        }
    }

    /// Create a suggestion candidate
    pub fn suggestion(text: impl Into<String>, kind: MatchKind) -> Self {
        Candidate {
            source: CandidateSource::Suggestion(text.into()),
            kind,
            score: kind.weight(),
        }
    }

    /// Whether this candidate refers to a product
    pub fn is_product(&self) -> bool {
        matches!(self.source, CandidateSource::Product(_))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_ordering_products() {
        assert!(MatchKind::ExactName.weight() > MatchKind::CategoryName.weight());
        assert!(MatchKind::CategoryName.weight() > MatchKind::PartialName.weight());
        assert!(MatchKind::PartialName.weight() > MatchKind::TagMatch.weight());
        assert!(MatchKind::TagMatch.weight() > MatchKind::Fuzzy.weight());
    }

    #[test]
    fn test_weight_ordering_suggestions() {
        assert!(MatchKind::History.weight() > MatchKind::Trending.weight());
        assert!(MatchKind::Trending.weight() > MatchKind::CategoryBrowse.weight());
    }

    #[test]
    fn test_is_product() {
        assert!(MatchKind::Fuzzy.is_product());
        assert!(!MatchKind::History.is_product());

        let product = Candidate::product(ProductId::new("p1"), MatchKind::ExactName);
        assert!(product.is_product());
        assert_eq!(product.score, 10);
        assert_eq!(product.source.product_id().unwrap().as_str(), "p1");

        let suggestion = Candidate::suggestion("running shoes", MatchKind::Trending);
        assert!(!suggestion.is_product());
        assert_eq!(suggestion.source.suggestion_text(), Some("running shoes"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(MatchKind::ExactName.as_str(), "exact-name");
        assert_eq!(MatchKind::CategoryBrowse.as_str(), "category-browse");
    }
}
