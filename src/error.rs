//! Error types for the quizrank host.

/// Errors raised while configuring or running the HTTP host.
///
/// Per-request failures are [`quiz_search::SearchError`]s and are turned
/// into HTTP responses by [`crate::server`], never into this type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration could not be parsed, serialised, or validated.
    #[error("config error: {0}")]
    Config(String),

    /// The listener could not be bound or the server stopped unexpectedly.
    #[error("server error: {0}")]
    Server(String),

    /// The search pipeline rejected its configuration.
    #[error("search error: {0}")]
    Search(#[from] quiz_search::SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ServerError>;
