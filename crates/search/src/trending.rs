//! Static trending-term source
//!
//! A fixed, lower-cased list of currently popular query terms. This is an
//! auxiliary suggestion source, not derived from the catalog; a deployment
//! would periodically ship a refreshed list.

use once_cell::sync::Lazy;

static TRENDING_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "iphone 15",
        "wireless headphones",
        "air fryer",
        "running shoes",
        "standing desk",
        "mechanical keyboard",
        "robot vacuum",
        "espresso machine",
    ]
});

/// The trending terms, lower-cased
pub fn trending_terms() -> &'static [&'static str] {
    &TRENDING_TERMS
}
