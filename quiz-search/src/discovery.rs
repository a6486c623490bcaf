//! Trait definition for pluggable source discovery backends.
//!
//! Each backend (Google, DuckDuckGo) implements [`SourceDiscovery`] to turn
//! a free-text query into an ordered list of candidate page URLs on the
//! configured target site.

use crate::config::SearchConfig;
use crate::engines::{DuckDuckGoDiscovery, GoogleDiscovery};
use crate::error::SearchError;
use crate::types::DiscoveryBackend;

/// A pluggable source discovery backend.
///
/// Implementors query a web search engine restricted to
/// `config.target_site` and return at most `config.max_sources` page
/// identifiers in relevance order. Returning an empty list is legitimate
/// and distinct from failing.
///
/// All implementations must be `Send + Sync` so the pipeline can be shared
/// between request handlers.
pub trait SourceDiscovery: Send + Sync {
    /// Discover candidate source pages for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the HTTP request fails or the response
    /// cannot be parsed.
    fn discover(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<String>, SearchError>> + Send;

    /// Returns which [`DiscoveryBackend`] this implementation represents.
    fn backend(&self) -> DiscoveryBackend;
}

/// Discovery that dispatches to the backend named in the configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredDiscovery {
    backend: DiscoveryBackend,
}

impl ConfiguredDiscovery {
    /// Dispatch every request to `backend`.
    pub fn new(backend: DiscoveryBackend) -> Self {
        Self { backend }
    }

    /// Use whichever backend `config.discovery` names.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.discovery)
    }
}

impl SourceDiscovery for ConfiguredDiscovery {
    async fn discover(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<String>, SearchError> {
        match self.backend {
            DiscoveryBackend::Google => GoogleDiscovery.discover(query, config).await,
            DiscoveryBackend::DuckDuckGo => DuckDuckGoDiscovery.discover(query, config).await,
        }
    }

    fn backend(&self) -> DiscoveryBackend {
        self.backend
    }
}

/// Build the restricted search string, e.g. `site:quizlet.com mitosis`.
pub fn site_query(site: &str, query: &str) -> String {
    format!("site:{} {}", site.trim(), query.trim())
}
