//! HTTP front end for the ranking pipeline.
//!
//! ## Endpoints
//!
//! - `GET /scrape?query=...` runs one query through the pipeline and returns
//!   the ranked cards as a JSON array
//!
//! Failures are reported as `{"error": "..."}` with a 400, 404 or 500 status.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use quiz_search::{Pipeline, RecordExtractor, SearchError, SourceDiscovery};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::ListenConfig;
use crate::error::{Result, ServerError};

/// Message returned when the `query` parameter is absent or blank.
pub const MISSING_QUERY_MESSAGE: &str = "Query parameter is missing";

/// Message returned when discovery finds no pages for the query.
pub const NO_SOURCES_MESSAGE: &str = "No sources found";

/// Message returned for every other pipeline failure.
pub const SCRAPE_FAILED_MESSAGE: &str = "Scraping failed";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Query string of `GET /scrape`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeParams {
    /// Free-text search query.
    #[serde(default)]
    pub query: Option<String>,
}

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    fn new(message: &str) -> Self {
        Self {
            error: message.to_owned(),
        }
    }
}

/// Map a pipeline error to the status and body sent to the client.
///
/// Internal details stay in the logs; clients only see a fixed message.
pub fn error_response(err: &SearchError) -> (StatusCode, ErrorResponse) {
    match err {
        SearchError::InvalidQuery(_) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(MISSING_QUERY_MESSAGE),
        ),
        SearchError::NoSourcesFound(_) => {
            (StatusCode::NOT_FOUND, ErrorResponse::new(NO_SOURCES_MESSAGE))
        }
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(SCRAPE_FAILED_MESSAGE),
        ),
    }
}

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// Shared state for axum handlers.
struct AppState<D, X> {
    pipeline: Arc<Pipeline<D, X>>,
}

impl<D, X> Clone for AppState<D, X> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

/// Build the router serving `pipeline`.
pub fn router<D, X>(pipeline: Arc<Pipeline<D, X>>) -> Router
where
    D: SourceDiscovery + 'static,
    X: RecordExtractor + 'static,
{
    Router::new()
        .route("/scrape", get(handle_scrape::<D, X>))
        .with_state(AppState { pipeline })
}

// ---------------------------------------------------------------------------
// QueryServer
// ---------------------------------------------------------------------------

/// Running HTTP server. The background task is aborted on drop.
pub struct QueryServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl QueryServer {
    /// Start serving `pipeline`.
    ///
    /// Binds to `{config.host}:{config.port}` (use port `0` for auto-assign)
    /// and begins serving in a background tokio task.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start<D, X>(pipeline: Arc<Pipeline<D, X>>, config: &ListenConfig) -> Result<Self>
    where
        D: SourceDiscovery + 'static,
        X: RecordExtractor + 'static,
    {
        let app = router(pipeline);

        let bind_addr = config.bind_addr();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| ServerError::Server(format!("bind to {bind_addr} failed: {e}")))?;

        let addr = listener
            .local_addr()
            .map_err(|e| ServerError::Server(format!("failed to get local addr: {e}")))?;

        info!("quizrank listening on http://{addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for QueryServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// `GET /scrape` runs the pipeline for `?query=`.
async fn handle_scrape<D, X>(
    State(state): State<AppState<D, X>>,
    Query(params): Query<ScrapeParams>,
) -> Response
where
    D: SourceDiscovery + 'static,
    X: RecordExtractor + 'static,
{
    let Some(query) = params.query.filter(|q| !q.is_empty()) else {
        let (status, body) = error_response(&SearchError::InvalidQuery("missing".into()));
        return (status, Json(body)).into_response();
    };
    tracing::debug!(query = %query, "scrape request");

    match state.pipeline.run(&query).await {
        Ok(records) => {
            info!(count = records.len(), "scrape finished");
            Json(records).into_response()
        }
        Err(err) => {
            if err.is_client_error() {
                tracing::debug!(error = %err, "scrape rejected");
            } else {
                tracing::error!(error = %err, "scrape failed");
            }
            let (status, body) = error_response(&err);
            (status, Json(body)).into_response()
        }
    }
}
