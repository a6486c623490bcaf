//! Shared HTTP client with User-Agent rotation for discovery and extraction.
//!
//! Provides a configured [`reqwest::Client`] with browser-like headers,
//! cookie support, and rotating User-Agent strings. A fresh client is built
//! per request; nothing is shared between requests.

use crate::config::SearchConfig;
use crate::error::SearchError;
use rand::seq::SliceRandom;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

/// Browser User-Agent strings; one is picked per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36 Edg/126.0.0.0",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:127.0) Gecko/20100101 Firefox/127.0",
];

/// Headers sent with every page request.
const PAGE_HEADERS: &[(&str, &str)] = &[
    ("accept", "text/html,application/xhtml+xml"),
    ("accept-language", "en-US,en;q=0.9"),
];

/// Maximum redirects followed for one page.
const MAX_REDIRECTS: usize = 10;

/// Build a [`reqwest::Client`] for fetching search result and study-set pages.
///
/// Cookies are kept for the lifetime of the client so consent redirects
/// work. The timeout is `config.timeout_seconds`.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let mut headers = HeaderMap::new();
    for (name, value) in PAGE_HEADERS {
        headers.insert(*name, HeaderValue::from_static(*value));
    }

    reqwest::Client::builder()
        .default_headers(headers)
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(user_agent_for(config))
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// The configured User-Agent, or a random one from the rotation list.
pub fn user_agent_for(config: &SearchConfig) -> String {
    config
        .user_agent
        .clone()
        .unwrap_or_else(|| random_user_agent().to_owned())
}

/// Send a prepared GET/POST request and return the body as text.
///
/// `label` names the remote side in error messages (e.g. `"Google"`).
///
/// # Errors
///
/// Returns [`SearchError::Timeout`] if the request timed out and
/// [`SearchError::Http`] for any other transport or status failure.
pub async fn fetch_text(
    request: reqwest::RequestBuilder,
    label: &str,
) -> Result<String, SearchError> {
    let response = request
        .send()
        .await
        .map_err(|e| request_error(label, e))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("{label} HTTP error: {e}")))?;

    let html = response
        .text()
        .await
        .map_err(|e| request_error(label, e))?;

    tracing::trace!(label, bytes = html.len(), "response received");
    Ok(html)
}

fn request_error(label: &str, err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        SearchError::Timeout(format!("{label} request timed out"))
    } else {
        SearchError::Http(format!("{label} request failed: {err}"))
    }
}

/// Pick a User-Agent from the rotation list.
pub fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}
