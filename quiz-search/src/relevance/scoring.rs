//! Hybrid lexical-overlap + edit-distance relevance scoring.
//!
//! Formula: `score = overlap_weight * overlap - levenshtein(query, candidate)`
//!
//! - `overlap` counts query tokens that occur anywhere in the candidate's
//!   tokens. Membership only: a query token matching five candidate tokens
//!   still counts once, while a query token repeated twice counts twice.
//! - The distance is measured in characters between the space-joined query
//!   tokens and the space-joined candidate tokens.

use std::collections::HashSet;

use super::normalize::{normalize, TokenSequence};

/// Default points per matched query token.
pub const DEFAULT_OVERLAP_WEIGHT: i64 = 10;

/// Computes relevance between a normalised query and candidate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorer {
    overlap_weight: i64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAP_WEIGHT)
    }
}

impl Scorer {
    /// Create a scorer awarding `overlap_weight` points per matched token.
    pub fn new(overlap_weight: i64) -> Self {
        Self { overlap_weight }
    }

    /// The configured weight per matched token.
    pub fn overlap_weight(&self) -> i64 {
        self.overlap_weight
    }

    /// Score `candidate_text` against `query`. Higher is more relevant.
    ///
    /// Defined for every input, including empty strings.
    pub fn score(&self, query: &TokenSequence, candidate_text: &str) -> i64 {
        let candidate = normalize(candidate_text);
        let overlap = keyword_overlap(query, &candidate);
        let distance = strsim::levenshtein(&query.joined(), &candidate.joined());

        let overlap = i64::try_from(overlap).unwrap_or(i64::MAX);
        let distance = i64::try_from(distance).unwrap_or(i64::MAX);
        // Saturates instead of overflowing for extreme configured weights.
        self.overlap_weight
            .saturating_mul(overlap)
            .saturating_sub(distance)
    }
}

/// Number of query tokens present in `candidate`, duplicates counted
/// separately.
pub fn keyword_overlap(query: &TokenSequence, candidate: &TokenSequence) -> usize {
    let present: HashSet<&str> = candidate.tokens().iter().map(String::as_str).collect();
    query
        .tokens()
        .iter()
        .filter(|token| present.contains(token.as_str()))
        .count()
}
