//! Tokenization for indexing and query processing
//!
//! Tokens are lower-cased whitespace-delimited words; n-grams are fixed-width
//! character windows cut from tokens for fuzzy matching.

use findex_core::limits::{MIN_TOKEN_LEN, NGRAM_LEN};

/// Tokenize text into indexable terms
///
/// - Lowercase
/// - Split on whitespace
/// - Filter tokens shorter than 2 characters
///
/// # Example
///
/// ```
/// use findex_search::tokenizer::tokenize;
///
/// let tokens = tokenize("iPhone 15 Pro");
/// assert_eq!(tokens, vec!["iphone", "15", "pro"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|s| s.chars().count() >= MIN_TOKEN_LEN)
        .map(String::from)
        .collect()
}

/// Tokenize and deduplicate, preserving first-occurrence order
///
/// # Example
///
/// ```
/// use findex_search::tokenizer::tokenize_unique;
///
/// let tokens = tokenize_unique("test test TEST");
/// assert_eq!(tokens, vec!["test"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// All overlapping fixed-width character windows of a token
///
/// Char-boundary safe. Tokens shorter than the window yield nothing.
///
/// # Example
///
/// ```
/// use findex_search::tokenizer::ngrams;
///
/// assert_eq!(ngrams("ifone"), vec!["ifo", "fon", "one"]);
/// assert!(ngrams("if").is_empty());
/// ```
pub fn ngrams(token: &str) -> Vec<String> {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() < NGRAM_LEN {
        return vec![];
    }
    chars
        .windows(NGRAM_LEN)
        .map(|w| w.iter().collect())
        .collect()
}
