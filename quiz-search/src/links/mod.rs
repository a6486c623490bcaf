//! Turning raw anchors from a search results page into source URLs.
//!
//! Search backends wrap outbound links in redirects, repeat the same page
//! under different URLs, and mix in links to their own pages. The helpers
//! here unwrap, filter to the target site, and deduplicate.

pub mod dedup;
pub mod url_normalize;

pub use dedup::dedup_links;
pub use url_normalize::normalize_url;

use url::Url;

/// Hosts whose pages are never valid sources, even under a matching domain.
const SEARCH_HOST_MARKERS: &[&str] = &["google", "duckduckgo.com"];

/// Query keys carrying the real target of a Google `/url` redirect.
const GOOGLE_REDIRECT_KEYS: &[&str] = &["q", "url"];

/// Query key carrying the real target of a DuckDuckGo `/l/` redirect.
const DUCKDUCKGO_REDIRECT_KEYS: &[&str] = &["uddg"];

/// Resolve an `href` found on a results page to the page it points at.
///
/// Relative and protocol-relative links are resolved against `base`.
/// Google (`/url?q=` or `/url?url=`) and DuckDuckGo (`/l/?uddg=`) redirect
/// wrappers are unwrapped. Returns `None` for non-HTTP links.
pub fn resolve_href(href: &str, base: &Url) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let parsed = base.join(href).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }

    let host = parsed.host_str().unwrap_or_default();
    let redirect_param = if is_search_host(host) && parsed.path() == "/url" {
        Some(GOOGLE_REDIRECT_KEYS)
    } else if host.ends_with("duckduckgo.com") && parsed.path().starts_with("/l/") {
        Some(DUCKDUCKGO_REDIRECT_KEYS)
    } else {
        None
    };

    match redirect_param {
        Some(keys) => parsed
            .query_pairs()
            .find(|(key, _)| keys.contains(&&**key))
            .map(|(_, value)| value.into_owned())
            .filter(|target| target.starts_with("http://") || target.starts_with("https://")),
        None => Some(parsed.to_string()),
    }
}

/// Returns `true` if `link` is hosted on `site` or one of its subdomains
/// and is not a search engine page.
pub fn belongs_to_site(link: &str, site: &str) -> bool {
    let Ok(parsed) = Url::parse(link) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.to_lowercase();
    let site = site.trim().trim_start_matches("www.").to_lowercase();

    if is_search_host(&host) {
        return false;
    }
    host == site || host.ends_with(&format!(".{site}"))
}

fn is_search_host(host: &str) -> bool {
    SEARCH_HOST_MARKERS.iter().any(|marker| host.contains(marker))
}

/// Resolve, filter, deduplicate, and truncate anchors from a results page.
pub fn collect_source_links<'a, I>(hrefs: I, base: &Url, site: &str, max: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let resolved = hrefs
        .into_iter()
        .filter_map(|href| resolve_href(href, base))
        .filter(|link| belongs_to_site(link, site));

    let mut links = dedup_links(resolved);
    links.truncate(max);
    links
}
