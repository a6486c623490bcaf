//! Order-preserving deduplication of discovered links.

use std::collections::HashSet;

use super::url_normalize::normalize_url;

/// Remove links whose canonical form was already seen.
///
/// The first occurrence wins and keeps its original spelling, so the
/// discovery ranking of the search backend is preserved.
pub fn dedup_links<I>(links: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(normalize_url(link)))
        .collect()
}
