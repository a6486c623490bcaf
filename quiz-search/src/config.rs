//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which site is searched, how many sources are
//! visited, the ranking constants, and request behaviour. The defaults
//! reproduce the tuning of the original scraping service.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::types::DiscoveryBackend;

/// Configuration for one discovery → extraction → ranking run.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour. Missing fields in a serialized
/// config fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Domain that discovered sources must belong to (e.g. `quizlet.com`).
    pub target_site: String,
    /// Which web search backend discovers source pages.
    pub discovery: DiscoveryBackend,
    /// Maximum number of sources visited per query.
    pub max_sources: usize,
    /// Number of best-scoring records each source contributes to the merge.
    pub per_source_limit: usize,
    /// Points awarded per query token found in a candidate.
    pub overlap_weight: i64,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Upper bound on one source's whole extraction attempt, in seconds.
    pub source_timeout_seconds: u64,
    /// How many sources are extracted at the same time.
    pub max_concurrent_sources: usize,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
    /// Overrides the discovery backend's endpoint (scheme + host + path).
    pub discovery_base_url: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target_site: "quizlet.com".to_owned(),
            discovery: DiscoveryBackend::Google,
            max_sources: 6,
            per_source_limit: 5,
            overlap_weight: 10,
            timeout_seconds: 30,
            source_timeout_seconds: 30,
            max_concurrent_sources: 6,
            user_agent: None,
            discovery_base_url: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `target_site` must not be blank
    /// - `max_sources`, `per_source_limit` and `max_concurrent_sources` must be > 0
    /// - `timeout_seconds` and `source_timeout_seconds` must be > 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.target_site.trim().is_empty() {
            return Err(SearchError::Config("target_site must not be empty".into()));
        }
        if self.max_sources == 0 {
            return Err(SearchError::Config(
                "max_sources must be greater than 0".into(),
            ));
        }
        if self.per_source_limit == 0 {
            return Err(SearchError::Config(
                "per_source_limit must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.source_timeout_seconds == 0 {
            return Err(SearchError::Config(
                "source_timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.max_concurrent_sources == 0 {
            return Err(SearchError::Config(
                "max_concurrent_sources must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SearchConfig::default();
        assert_eq!(config.target_site, "quizlet.com");
        assert_eq!(config.discovery, DiscoveryBackend::Google);
        assert_eq!(config.max_sources, 6);
        assert_eq!(config.per_source_limit, 5);
        assert_eq!(config.overlap_weight, 10);
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.user_agent.is_none());
        assert!(config.discovery_base_url.is_none());
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn blank_target_site_rejected() {
        let config = SearchConfig {
            target_site: "  ".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("target_site"));
    }

    #[test]
    fn zero_max_sources_rejected() {
        let config = SearchConfig {
            max_sources: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_sources"));
    }

    #[test]
    fn zero_per_source_limit_rejected() {
        let config = SearchConfig {
            per_source_limit: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("per_source_limit"));
    }

    #[test]
    fn zero_timeouts_rejected() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("timeout_seconds"));

        let config = SearchConfig {
            source_timeout_seconds: 0,
            ..Default::default()
        };
        assert!(config
            .validate()
            .unwrap_err()
            .to_string()
            .contains("source_timeout_seconds"));
    }

    #[test]
    fn zero_concurrency_rejected() {
        let config = SearchConfig {
            max_concurrent_sources: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_concurrent_sources"));
    }

    #[test]
    fn negative_overlap_weight_is_allowed_for_tuning() {
        let config = SearchConfig {
            overlap_weight: -1,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"max_sources": 3, "discovery": "duckduckgo"}"#)
                .expect("deserialize");
        assert_eq!(config.max_sources, 3);
        assert_eq!(config.discovery, DiscoveryBackend::DuckDuckGo);
        assert_eq!(config.per_source_limit, 5);
        assert_eq!(config.target_site, "quizlet.com");
    }
}
