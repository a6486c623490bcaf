//! # quiz-search
//!
//! Finds study-set pages for a query on one content site, extracts their
//! question/answer cards, and ranks every card by relevance to the query.
//!
//! ## Design
//!
//! - Discovers source pages with a `site:` restricted web search (Google or
//!   DuckDuckGo), scraped with CSS selectors
//! - Extracts term cards from each source concurrently, each under its own
//!   timeout; a failing source is skipped, never fatal
//! - Scores cards with a hybrid of keyword overlap and edit distance, keeps
//!   the best few per source, then sorts everything globally
//! - Holds no state between requests: no cache, no shared browser
//!
//! The relevance core ([`relevance`]) is pure and can be used on its own:
//!
//! ```
//! use quiz_search::relevance::Ranker;
//! use quiz_search::{CandidateRecord, SourceCandidates};
//!
//! let source = "https://quizlet.com/1/biology";
//! let ranked = Ranker::default().rank(
//!     "photosynthesis",
//!     vec![SourceCandidates::new(
//!         source,
//!         vec![
//!             CandidateRecord::scraped("Respiration", "breaks down glucose", source),
//!             CandidateRecord::scraped("Photosynthesis", "process plants use", source),
//!         ],
//!     )],
//! );
//! assert_eq!(ranked[0].record.prompt, "Photosynthesis");
//! ```

pub mod config;
pub mod discovery;
pub mod engines;
pub mod error;
pub mod extract;
pub mod http;
pub mod links;
pub mod orchestrator;
pub mod relevance;
pub mod types;

pub use config::SearchConfig;
pub use discovery::{ConfiguredDiscovery, SourceDiscovery};
pub use error::{Result, SearchError};
pub use extract::{RecordExtractor, StudySetExtractor};
pub use orchestrator::Pipeline;
pub use types::{CandidateRecord, DiscoveryBackend, ScoredRecord, SourceCandidates};

/// The pipeline wired to real HTTP collaborators.
pub type WebPipeline = Pipeline<ConfiguredDiscovery, StudySetExtractor>;

/// Build a [`WebPipeline`] using the discovery backend named in `config`.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid.
pub fn web_pipeline(config: SearchConfig) -> Result<WebPipeline> {
    Pipeline::new(
        ConfiguredDiscovery::from_config(&config),
        StudySetExtractor,
        config,
    )
}

/// Search the target site and rank every extracted card against `query`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidQuery`] for a blank query,
/// [`SearchError::NoSourcesFound`] if discovery finds nothing, and
/// [`SearchError::Orchestration`] if discovery fails outright. Individual
/// source failures are logged and skipped.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> quiz_search::Result<()> {
/// let config = quiz_search::SearchConfig::default();
/// let cards = quiz_search::search("photosynthesis", &config).await?;
/// for card in &cards {
///     println!("{} ({}): {}", card.record.prompt, card.match_score, card.record.response);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<Vec<ScoredRecord>> {
    web_pipeline(config.clone())?.run(query).await
}

/// Search with the default configuration (quizlet.com via Google).
///
/// # Errors
///
/// Same as [`search`].
pub async fn search_default(query: &str) -> Result<Vec<ScoredRecord>> {
    search(query, &SearchConfig::default()).await
}
