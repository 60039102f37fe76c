//! Candidate merging, de-duplication and ranking
//!
//! All strategies' candidates are merged into one list: products de-dup by
//! id keeping their highest-scoring candidate, suggestions de-dup by
//! lower-cased text, and the result is sorted by score descending with ties
//! broken by discovery order. Discovery order is deterministic because every
//! probe walks ordered structures.

use findex_core::{Candidate, CandidateSource};
use rustc_hash::FxHashMap;

/// Merge, de-duplicate and rank candidates from all strategies
///
/// The input order is the discovery order. When a later candidate outscores
/// an earlier one for the same identity, the later candidate replaces it
/// (and carries its own discovery position into the tie-break); equal scores
/// keep the earlier candidate.
pub fn merge_and_rank(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut kept: Vec<(Candidate, usize)> = Vec::new();
    let mut by_identity: FxHashMap<CandidateSource, usize> = FxHashMap::default();

    for (seq, candidate) in candidates.into_iter().enumerate() {
        let identity = identity_of(&candidate);
        match by_identity.get(&identity) {
            Some(&slot) => {
                if candidate.score > kept[slot].0.score {
                    kept[slot] = (candidate, seq);
                }
            }
            None => {
                by_identity.insert(identity, kept.len());
                kept.push((candidate, seq));
            }
        }
    }

    kept.sort_by(|a, b| b.0.score.cmp(&a.0.score).then(a.1.cmp(&b.1)));
    kept.into_iter().map(|(candidate, _)| candidate).collect()
}

/// De-duplication identity: product id, or case-folded suggestion text
fn identity_of(candidate: &Candidate) -> CandidateSource {
    match &candidate.source {
        CandidateSource::Product(id) => CandidateSource::Product(id.clone()),
        CandidateSource::Suggestion(text) => CandidateSource::Suggestion(text.to_lowercase()),
    }
}
