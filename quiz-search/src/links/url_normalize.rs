//! Canonical URL form used to detect duplicate source pages.
//!
//! Search result pages often link the same study set several times with
//! different tracking parameters, fragments, or a trailing slash. Two links
//! are treated as the same source when their canonical forms are equal.

use url::Url;

/// Query parameters that never change which page is served.
const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
    "ved",
    "sa",
    "usg",
    "ref",
    "x",
    "i",
];

/// Canonicalise `raw` for comparison.
///
/// - scheme and host are lowercased (the path keeps its case)
/// - default ports and the fragment are dropped
/// - tracking parameters are dropped, the rest sorted by key
/// - a trailing slash is removed unless the path is exactly `/`
///
/// Anything that does not parse as an absolute URL is returned unchanged.
///
/// ```
/// use quiz_search::links::normalize_url;
///
/// assert_eq!(
///     normalize_url("https://Quizlet.com/123/cells-flash-cards/?x=1jqt#top"),
///     normalize_url("https://quizlet.com/123/cells-flash-cards"),
/// );
/// ```
pub fn normalize_url(raw: &str) -> String {
    let Ok(mut parsed) = Url::parse(raw) else {
        return raw.to_string();
    };

    // Parsing already drops default ports.
    parsed.set_fragment(None);

    let mut params: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.to_lowercase().as_str()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    params.sort();

    if params.is_empty() {
        parsed.set_query(None);
    } else {
        parsed
            .query_pairs_mut()
            .clear()
            .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    let path = parsed.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        parsed.set_path(&path[..path.len() - 1]);
    }

    parsed.to_string()
}
