//! Per-source top-k selection and global ordering of scored records.
//!
//! # Pipeline
//!
//! 1. Normalise the query once
//! 2. Score every record of a source over `prompt + " " + response`
//! 3. Stable-sort the source by score (descending), keep `per_source_limit`
//! 4. Concatenate sources in input order
//! 5. Stable-sort the merged list by score (descending)
//!
//! Both sorts are stable, so equal scores keep extraction order within a
//! source and source order across sources. There is no global cap.

use crate::config::SearchConfig;
use crate::types::{ScoredRecord, SourceCandidates};

use super::normalize::{normalize, TokenSequence};
use super::scoring::Scorer;

/// Default number of records each source contributes.
pub const DEFAULT_PER_SOURCE_LIMIT: usize = 5;

/// Scores, caps, and merges candidate records from many sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranker {
    scorer: Scorer,
    per_source_limit: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(Scorer::default(), DEFAULT_PER_SOURCE_LIMIT)
    }
}

impl Ranker {
    /// Create a ranker keeping at most `per_source_limit` records per source.
    pub fn new(scorer: Scorer, per_source_limit: usize) -> Self {
        Self {
            scorer,
            per_source_limit,
        }
    }

    /// Build a ranker from the ranking constants in `config`.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(Scorer::new(config.overlap_weight), config.per_source_limit)
    }

    /// Rank every source's records against `query`.
    ///
    /// Sources without records contribute nothing. A query that normalises
    /// to no tokens still ranks, purely by edit distance.
    pub fn rank(&self, query: &str, sources: Vec<SourceCandidates>) -> Vec<ScoredRecord> {
        let query_tokens = normalize(query);

        let mut merged: Vec<ScoredRecord> = sources
            .into_iter()
            .flat_map(|source| self.top_for_source(&query_tokens, source))
            .collect();

        sort_by_score(&mut merged);
        merged
    }

    /// Score one source and keep its best `per_source_limit` records.
    pub fn top_for_source(
        &self,
        query_tokens: &TokenSequence,
        source: SourceCandidates,
    ) -> Vec<ScoredRecord> {
        let mut scored: Vec<ScoredRecord> = source
            .records
            .into_iter()
            .map(|record| {
                let match_score = self.scorer.score(query_tokens, &record.scoring_text());
                ScoredRecord {
                    record,
                    match_score,
                }
            })
            .collect();

        sort_by_score(&mut scored);
        scored.truncate(self.per_source_limit);

        tracing::trace!(
            source = %source.source,
            kept = scored.len(),
            "source ranked"
        );
        scored
    }
}

/// Stable sort, highest score first.
fn sort_by_score(records: &mut [ScoredRecord]) {
    records.sort_by(|a, b| b.match_score.cmp(&a.match_score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CandidateRecord;

    fn record(prompt: &str, response: &str, origin: &str) -> CandidateRecord {
        CandidateRecord::scraped(prompt, response, origin)
    }

    #[test]
    fn photosynthesis_example_ranks_relevant_record_first() {
        let sources = vec![SourceCandidates::new(
            "https://quizlet.com/bio",
            vec![
                record("Respiration", "breaks down glucose", "https://quizlet.com/bio"),
                record("Photosynthesis", "process plants use", "https://quizlet.com/bio"),
            ],
        )];

        let ranked = Ranker::default().rank("photosynthesis", sources);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].record.prompt, "Photosynthesis");
        assert_eq!(ranked[0].match_score, 10 - 19);
        assert_eq!(ranked[1].match_score, -25);
    }

    #[test]
    fn per_source_cap_keeps_best_records() {
        let records: Vec<CandidateRecord> = (0..8)
            .map(|i| record(&"x".repeat(i), "", "s"))
            .collect();
        let sources = vec![SourceCandidates::new("s", records)];

        let ranked = Ranker::default().rank("", sources);

        assert_eq!(ranked.len(), 5);
        // Empty query: score is minus the candidate length, shortest wins.
        let prompts: Vec<usize> = ranked.iter().map(|r| r.record.prompt.len()).collect();
        assert_eq!(prompts, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn source_order_breaks_ties_after_merge() {
        let sources = vec![
            SourceCandidates::new("a", vec![record("same", "text", "a")]),
            SourceCandidates::new("b", vec![record("same", "text", "b")]),
        ];

        let ranked = Ranker::default().rank("same text", sources);

        assert_eq!(ranked[0].record.origin, "a");
        assert_eq!(ranked[1].record.origin, "b");
        assert_eq!(ranked[0].match_score, ranked[1].match_score);
    }

    #[test]
    fn extraction_order_breaks_ties_within_source() {
        let records = (0..7)
            .map(|i| record("tie", "card", &format!("card-{i}")))
            .collect();
        let sources = vec![SourceCandidates::new("s", records)];

        let ranked = Ranker::default().rank("tie card", sources);

        let origins: Vec<&str> = ranked.iter().map(|r| r.record.origin.as_str()).collect();
        assert_eq!(origins, ["card-0", "card-1", "card-2", "card-3", "card-4"]);
    }

    #[test]
    fn empty_sources_produce_empty_result() {
        let ranked = Ranker::default().rank("anything", vec![]);
        assert!(ranked.is_empty());

        let ranked = Ranker::default().rank(
            "anything",
            vec![SourceCandidates::new("empty", vec![])],
        );
        assert!(ranked.is_empty());
    }

    #[test]
    fn no_global_cap_beyond_per_source_limit() {
        let sources: Vec<SourceCandidates> = (0..4)
            .map(|s| {
                let origin = format!("src-{s}");
                let records = (0..6).map(|_| record("q", "a", &origin)).collect();
                SourceCandidates::new(origin, records)
            })
            .collect();

        let ranked = Ranker::default().rank("q", sources);
        assert_eq!(ranked.len(), 4 * 5);
    }

    #[test]
    fn from_config_uses_configured_constants() {
        let config = SearchConfig {
            per_source_limit: 2,
            overlap_weight: 100,
            ..Default::default()
        };
        let ranker = Ranker::from_config(&config);
        let records = (0..4).map(|_| record("ion", "", "s")).collect();

        let ranked = ranker.rank("ion", vec![SourceCandidates::new("s", records)]);

        assert_eq!(ranked.len(), 2);
        // "ion " normalises to "ion": overlap 1 → 100, distance 0
        assert_eq!(ranked[0].match_score, 100);
    }
}
