//! Core record types and discovery backend identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provenance label attached to records scraped from discovered pages.
pub const PROVENANCE_WEB_SCRAPING: &str = "Google Scraping";

/// One question/answer pair extracted from a source page.
///
/// Created by a [`crate::extract::RecordExtractor`] and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// The question side of the card.
    pub prompt: String,
    /// The answer side of the card.
    pub response: String,
    /// Identifier of the page this record came from (usually a URL).
    pub origin: String,
    /// Constant label describing how the record was obtained.
    pub provenance: String,
}

impl CandidateRecord {
    /// Build a record tagged with [`PROVENANCE_WEB_SCRAPING`].
    pub fn scraped(
        prompt: impl Into<String>,
        response: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            response: response.into(),
            origin: origin.into(),
            provenance: PROVENANCE_WEB_SCRAPING.to_owned(),
        }
    }

    /// The text block scored against the query: prompt and response joined
    /// by a single space.
    pub fn scoring_text(&self) -> String {
        format!("{} {}", self.prompt, self.response)
    }
}

/// A [`CandidateRecord`] with its relevance score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// The scored record. Flattened so the wire format is a single object.
    #[serde(flatten)]
    pub record: CandidateRecord,
    /// Relevance to the query. Higher is better; may be negative.
    #[serde(rename = "matchScore")]
    pub match_score: i64,
}

/// All records extracted from one source, in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCandidates {
    /// Identifier (URL) of the source page.
    pub source: String,
    /// Records in the order the extractor produced them.
    pub records: Vec<CandidateRecord>,
}

impl SourceCandidates {
    /// Group `records` under `source`.
    pub fn new(source: impl Into<String>, records: Vec<CandidateRecord>) -> Self {
        Self {
            source: source.into(),
            records,
        }
    }
}

/// Supported web search backends for source discovery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryBackend {
    /// Google web search with a `site:` restriction.
    #[default]
    Google,
    /// DuckDuckGo's HTML-only endpoint, tolerant of automated requests.
    DuckDuckGo,
}

impl DiscoveryBackend {
    /// Returns the human-readable name of this backend.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::DuckDuckGo => "DuckDuckGo",
        }
    }

    /// Returns all available backend variants.
    pub fn all() -> &'static [DiscoveryBackend] {
        &[Self::Google, Self::DuckDuckGo]
    }
}

impl fmt::Display for DiscoveryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scraped_record_carries_provenance() {
        let record = CandidateRecord::scraped("Mitosis", "cell division", "https://quizlet.com/1");
        assert_eq!(record.provenance, PROVENANCE_WEB_SCRAPING);
        assert_eq!(record.origin, "https://quizlet.com/1");
    }

    #[test]
    fn scoring_text_joins_with_single_space() {
        let record = CandidateRecord::scraped("Photosynthesis", "process plants use", "x");
        assert_eq!(record.scoring_text(), "Photosynthesis process plants use");
    }

    #[test]
    fn scored_record_serialises_flat_with_match_score() {
        let scored = ScoredRecord {
            record: CandidateRecord::scraped("Q", "A", "https://quizlet.com/2"),
            match_score: -3,
        };
        let json = serde_json::to_value(&scored).expect("serialize");
        assert_eq!(json["prompt"], "Q");
        assert_eq!(json["response"], "A");
        assert_eq!(json["origin"], "https://quizlet.com/2");
        assert_eq!(json["provenance"], "Google Scraping");
        assert_eq!(json["matchScore"], -3);
        assert!(json.get("record").is_none());
    }

    #[test]
    fn discovery_backend_display() {
        assert_eq!(DiscoveryBackend::Google.to_string(), "Google");
        assert_eq!(DiscoveryBackend::DuckDuckGo.to_string(), "DuckDuckGo");
    }

    #[test]
    fn discovery_backend_default_is_google() {
        assert_eq!(DiscoveryBackend::default(), DiscoveryBackend::Google);
        assert_eq!(DiscoveryBackend::all().len(), 2);
    }

    #[test]
    fn discovery_backend_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&DiscoveryBackend::DuckDuckGo).expect("serialize");
        assert_eq!(json, "\"duckduckgo\"");
        let decoded: DiscoveryBackend = serde_json::from_str("\"google\"").expect("deserialize");
        assert_eq!(decoded, DiscoveryBackend::Google);
    }
}
