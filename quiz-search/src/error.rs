//! Error types for the quiz-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Queries are never embedded in messages at
//! a level above what the caller already knows.

/// Errors that can occur while discovering, extracting, or ranking records.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The query was missing or empty. Rejected before any network access.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Source discovery returned no candidate pages for the query.
    #[error("no sources found: {0}")]
    NoSourcesFound(String),

    /// A single source could not be extracted. Non-fatal inside the pipeline.
    #[error("extraction failed for {origin}: {reason}")]
    SourceExtractionFailed {
        /// Identifier (URL) of the failed source.
        origin: String,
        /// Why extraction failed.
        reason: String,
    },

    /// Unrecoverable collaborator failure outside the ranking core.
    #[error("orchestration failed: {0}")]
    Orchestration(String),

    /// An operation exceeded its time budget.
    #[error("timed out: {0}")]
    Timeout(String),

    /// An HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Returns `true` for errors caused by the caller's input rather than
    /// by the system or a remote collaborator.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidQuery(_))
    }
}

/// Convenience type alias for quiz-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
