//! Alternative-query derivation for empty result sets
//!
//! When a submitted search matches nothing, up to five replacement queries
//! are offered: synonym substitutions of the query's own tokens first, then
//! generically popular queries, de-duplicated case-insensitively and never
//! echoing the failing query itself.

use findex_core::limits::ALTERNATIVE_LIMIT;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Known synonym pairs, applied in both directions
static SYNONYMS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("phone", "smartphone"),
        ("tv", "television"),
        ("laptop", "notebook"),
        ("headphones", "earbuds"),
        ("couch", "sofa"),
        ("sneakers", "trainers"),
        ("fridge", "refrigerator"),
    ]
});

/// Generically popular queries, used as a last resort
static POPULAR_QUERIES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "iphone",
        "wireless headphones",
        "laptop",
        "coffee maker",
        "running shoes",
    ]
});

/// Derive up to five alternative queries for a failed search
pub fn alternative_queries(query: &str) -> Vec<String> {
    let normalized = query.trim().to_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(normalized.clone());

    let mut alternatives = Vec::new();
    let mut push = |candidate: String, alternatives: &mut Vec<String>| {
        if alternatives.len() < ALTERNATIVE_LIMIT && seen.insert(candidate.clone()) {
            alternatives.push(candidate);
        }
    };

    // Synonym substitution, token by token.
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    for (position, token) in tokens.iter().enumerate() {
        for (left, right) in SYNONYMS.iter() {
            let replacement = if token == left {
                right
            } else if token == right {
                left
            } else {
                continue;
            };
            let mut substituted = tokens.clone();
            substituted[position] = replacement;
            push(substituted.join(" "), &mut alternatives);
        }
    }

    // Popular queries fill the remaining slots.
    for popular in POPULAR_QUERIES.iter() {
        push(popular.to_string(), &mut alternatives);
    }

    alternatives
}
