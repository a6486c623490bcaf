//! Request pipeline: validate → discover → extract (concurrently) → rank.
//!
//! The pipeline owns its collaborators and configuration but no per-request
//! state, so one instance can serve any number of concurrent requests.

use std::time::Duration;

use futures::StreamExt;

use crate::config::SearchConfig;
use crate::discovery::SourceDiscovery;
use crate::error::SearchError;
use crate::extract::RecordExtractor;
use crate::relevance::Ranker;
use crate::types::{ScoredRecord, SourceCandidates};

/// Discovery, extraction, and ranking wired together for one target site.
#[derive(Debug, Clone)]
pub struct Pipeline<D, X> {
    discovery: D,
    extractor: X,
    ranker: Ranker,
    config: SearchConfig,
}

impl<D, X> Pipeline<D, X>
where
    D: SourceDiscovery,
    X: RecordExtractor,
{
    /// Assemble a pipeline from its collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` fails validation.
    pub fn new(discovery: D, extractor: X, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            discovery,
            extractor,
            ranker: Ranker::from_config(&config),
            config,
        })
    }

    /// The configuration this pipeline was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run one query through the whole pipeline.
    ///
    /// # Pipeline
    ///
    /// 1. Reject blank queries with [`SearchError::InvalidQuery`]
    /// 2. Discover up to `max_sources` source pages
    /// 3. Fail with [`SearchError::NoSourcesFound`] if there are none
    /// 4. Extract all sources concurrently, each under its own timeout;
    ///    failed or empty sources are logged and skipped
    /// 5. Rank the surviving batches in discovery order
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidQuery`], [`SearchError::NoSourcesFound`],
    /// or [`SearchError::Orchestration`] if discovery itself fails. Source
    /// extraction failures never fail the request; if every source fails the
    /// result is an empty list.
    pub async fn run(&self, query: &str) -> Result<Vec<ScoredRecord>, SearchError> {
        let query = validate_query(query)?;

        let mut sources = self
            .discovery
            .discover(query, &self.config)
            .await
            .map_err(|err| {
                tracing::warn!(
                    backend = %self.discovery.backend(),
                    error = %err,
                    "source discovery failed"
                );
                SearchError::Orchestration(err.to_string())
            })?;
        sources.truncate(self.config.max_sources);

        if sources.is_empty() {
            return Err(SearchError::NoSourcesFound(format!(
                "{} returned no {} pages",
                self.discovery.backend(),
                self.config.target_site
            )));
        }
        tracing::debug!(count = sources.len(), "sources discovered");

        let batches = self.extract_all(&sources).await;
        tracing::debug!(
            discovered = sources.len(),
            extracted = batches.len(),
            "extraction finished"
        );

        Ok(self.ranker.rank(query, batches))
    }

    /// Extract every source with bounded concurrency, keeping discovery
    /// order in the output.
    async fn extract_all(&self, sources: &[String]) -> Vec<SourceCandidates> {
        // Built before streaming so the `run` future stays `Send`.
        let attempts: Vec<_> = sources
            .iter()
            .map(|source| self.extract_one(source))
            .collect();
        futures::stream::iter(attempts)
            .buffered(self.config.max_concurrent_sources)
            .filter_map(futures::future::ready)
            .collect()
            .await
    }

    /// Extract one source. Every failure mode collapses to `None`.
    async fn extract_one(&self, source: &str) -> Option<SourceCandidates> {
        let limit = Duration::from_secs(self.config.source_timeout_seconds);
        let attempt = tokio::time::timeout(limit, self.extractor.extract(source, &self.config));

        let reason = match attempt.await {
            Ok(Ok(records)) if !records.is_empty() => {
                tracing::debug!(source, count = records.len(), "source extracted");
                return Some(SourceCandidates::new(source, records));
            }
            Ok(Ok(_)) => "no records".to_owned(),
            Ok(Err(err)) => err.to_string(),
            Err(_) => format!("timed out after {}s", limit.as_secs()),
        };

        let failure = SearchError::SourceExtractionFailed {
            origin: source.to_owned(),
            reason,
        };
        tracing::warn!(error = %failure, "skipping source");
        None
    }
}

/// Trim `query`, rejecting it if nothing is left.
pub fn validate_query(query: &str) -> Result<&str, SearchError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(SearchError::InvalidQuery(
            "query parameter is missing or empty".into(),
        ));
    }
    Ok(trimmed)
}
