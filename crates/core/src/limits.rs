//! Tuning constants for indexing and query processing
//!
//! These are the knobs the engine is calibrated with. Tests pin the relative
//! behavior (caps, minimums); the values themselves are tuning.

/// Minimum token length kept during field tokenization
pub const MIN_TOKEN_LEN: usize = 2;

/// Minimum query length; shorter queries short-circuit to empty results
pub const MIN_QUERY_LEN: usize = 2;

/// N-gram window size for the fuzzy index
pub const NGRAM_LEN: usize = 3;

/// Maximum entries returned by a suggestion request
pub const SUGGESTION_LIMIT: usize = 8;

/// Maximum retained query-history entries; oldest evicted beyond this
pub const HISTORY_CAP: usize = 50;

/// Maximum alternative queries derived for an empty result set
pub const ALTERNATIVE_LIMIT: usize = 5;

/// Default catalog page size for the paginated HTTP collaborator
pub const DEFAULT_PAGE_SIZE: usize = 200;
