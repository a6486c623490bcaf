//! DuckDuckGo discovery backend: the most scraper-friendly fallback.
//!
//! Uses the HTML-only version at `https://html.duckduckgo.com/html/`
//! which requires no JavaScript and is tolerant of automated requests.
//! Result links are wrapped in `//duckduckgo.com/l/?uddg=` redirects.

use crate::config::SearchConfig;
use crate::discovery::{site_query, SourceDiscovery};
use crate::error::SearchError;
use crate::http;
use crate::links::collect_source_links;
use crate::types::DiscoveryBackend;
use scraper::{Html, Selector};
use url::Url;

/// Default DuckDuckGo HTML endpoint.
pub const DUCKDUCKGO_HTML_URL: &str = "https://html.duckduckgo.com/html/";

/// DuckDuckGo HTML search scraper.
pub struct DuckDuckGoDiscovery;

impl SourceDiscovery for DuckDuckGoDiscovery {
    async fn discover(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<String>, SearchError> {
        let restricted = site_query(&config.target_site, query);
        tracing::trace!(query = %restricted, "DuckDuckGo discovery");

        let endpoint = config
            .discovery_base_url
            .as_deref()
            .unwrap_or(DUCKDUCKGO_HTML_URL);
        let base = Url::parse(endpoint)
            .map_err(|e| SearchError::Config(format!("invalid discovery URL: {e}")))?;

        let client = http::build_client(config)?;
        let request = client
            .post(base.clone())
            .form(&[("q", restricted.as_str())]);
        let html = http::fetch_text(request, "DuckDuckGo").await?;

        parse_duckduckgo_html(&html, &base, &config.target_site, config.max_sources)
    }

    fn backend(&self) -> DiscoveryBackend {
        DiscoveryBackend::DuckDuckGo
    }
}

/// Parse a DuckDuckGo HTML results page into source links.
///
/// Only organic result titles are considered; ads carry `result--ad`.
pub(crate) fn parse_duckduckgo_html(
    html: &str,
    base: &Url,
    site: &str,
    max_sources: usize,
) -> Result<Vec<String>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse(
        ".result.results_links.results_links_deep:not(.result--ad), .web-result:not(.result--ad)",
    )
    .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse("a.result__a")
        .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;

    let hrefs = document
        .select(&result_sel)
        .filter_map(|result| result.select(&title_sel).next())
        .filter_map(|a| a.value().attr("href"));

    let links = collect_source_links(hrefs, base, site, max_sources);
    tracing::debug!(count = links.len(), "DuckDuckGo links parsed");
    Ok(links)
}
