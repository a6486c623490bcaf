//! Google discovery backend, using `site:` restricted web search.
//!
//! Google has the best index coverage of study-set pages but employs
//! aggressive bot detection (CAPTCHAs, consent walls). A blocked response
//! simply yields no links, which the pipeline reports as no sources found.

use crate::config::SearchConfig;
use crate::discovery::{site_query, SourceDiscovery};
use crate::error::SearchError;
use crate::http;
use crate::links::collect_source_links;
use crate::types::DiscoveryBackend;
use scraper::{Html, Selector};
use url::Url;

/// Default Google search endpoint.
pub const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search";

/// Google HTML search scraper.
pub struct GoogleDiscovery;

impl SourceDiscovery for GoogleDiscovery {
    async fn discover(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<String>, SearchError> {
        let restricted = site_query(&config.target_site, query);
        tracing::trace!(query = %restricted, "Google discovery");

        let endpoint = config
            .discovery_base_url
            .as_deref()
            .unwrap_or(GOOGLE_SEARCH_URL);
        let base = Url::parse(endpoint)
            .map_err(|e| SearchError::Config(format!("invalid discovery URL: {e}")))?;

        let client = http::build_client(config)?;
        let request = client
            .get(base.clone())
            .query(&[("q", restricted.as_str()), ("hl", "en")]);
        let html = http::fetch_text(request, "Google").await?;

        parse_google_html(&html, &base, &config.target_site, config.max_sources)
    }

    fn backend(&self) -> DiscoveryBackend {
        DiscoveryBackend::Google
    }
}

/// Parse a Google results page into source links.
///
/// Every anchor on the page is considered, mirroring how a browser-side
/// `a[href]` sweep would see it; filtering to the target site does the rest.
pub(crate) fn parse_google_html(
    html: &str,
    base: &Url,
    site: &str,
    max_sources: usize,
) -> Result<Vec<String>, SearchError> {
    let document = Html::parse_document(html);
    let anchor_sel = Selector::parse("a[href]")
        .map_err(|e| SearchError::Parse(format!("invalid anchor selector: {e:?}")))?;

    let hrefs = document
        .select(&anchor_sel)
        .filter_map(|a| a.value().attr("href"));

    Ok(collect_source_links(hrefs, base, site, max_sources))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse(GOOGLE_SEARCH_URL).expect("base url")
    }

    const MOCK_HTML: &str = r#"
        <html><body>
          <a href="/preferences">Settings</a>
          <div class="g"><a href="/url?q=https://quizlet.com/101/cell-biology-flash-cards/&amp;sa=U&amp;ved=x">Cell Biology</a></div>
          <div class="g"><a href="https://quizlet.com/202/mitosis-flash-cards/">Mitosis</a></div>
          <div class="g"><a href="https://quizlet.com/101/cell-biology-flash-cards/">Cell Biology again</a></div>
          <div class="g"><a href="https://www.google.com/search?q=related">Related</a></div>
          <div class="g"><a href="https://example.com/cells">Other site</a></div>
          <div class="g"><a href="https://quizlet.com/303/organelles/">Organelles</a></div>
        </body></html>
    "#;

    #[test]
    fn engine_backend_is_google() {
        assert_eq!(GoogleDiscovery.backend(), DiscoveryBackend::Google);
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GoogleDiscovery>();
    }

    #[test]
    fn parse_keeps_only_target_site_in_order() {
        let links = parse_google_html(MOCK_HTML, &base(), "quizlet.com", 6).expect("parse");
        assert_eq!(
            links,
            [
                "https://quizlet.com/101/cell-biology-flash-cards/",
                "https://quizlet.com/202/mitosis-flash-cards/",
                "https://quizlet.com/303/organelles/",
            ]
        );
    }

    #[test]
    fn parse_respects_max_sources() {
        let links = parse_google_html(MOCK_HTML, &base(), "quizlet.com", 1).expect("parse");
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn parse_empty_html_returns_no_links() {
        let links = parse_google_html("<html></html>", &base(), "quizlet.com", 6).expect("parse");
        assert!(links.is_empty());
    }

    #[test]
    fn parse_consent_wall_returns_no_links() {
        let html = r#"<html><body><form action="https://consent.google.com/save">
            <a href="https://policies.google.com/privacy">Privacy</a></form></body></html>"#;
        let links = parse_google_html(html, &base(), "quizlet.com", 6).expect("parse");
        assert!(links.is_empty());
    }
}
