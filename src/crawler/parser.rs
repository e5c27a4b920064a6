//! Link extraction from raw page text
//!
//! Links are found by pattern matching on the literal `href="..."` form.
//! There is no DOM: single-quoted and unquoted attributes are not matched,
//! and any element carrying a double-quoted `href` contributes a link.

use crate::url::is_same_origin;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static HREF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="(.*?)""#).expect("href pattern is a valid regex"));

/// Extracts same-origin links from page text
///
/// Every double-quoted `href` value is resolved against `base_url` with
/// standard URL resolution. Values that fail to resolve are skipped, as are
/// results whose scheme or host differ from `base_url`'s.
///
/// The result follows document order and keeps duplicates; deduplication is
/// the visited set's job. This function never fails.
///
/// # Example
///
/// ```
/// use site_mirror::crawler::extract_links;
/// use url::Url;
///
/// let base = Url::parse("http://a.com").unwrap();
/// let links = extract_links(&base, r#"<a href="/b">B</a><a href="http://b.com/x">X</a>"#);
/// assert_eq!(links, vec!["http://a.com/b".to_string()]);
/// ```
pub fn extract_links(base_url: &Url, html: &str) -> Vec<String> {
    HREF_PATTERN
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .filter_map(|href| resolve_link(href.as_str(), base_url))
        .collect()
}

/// Resolves an href against the base URL, keeping it only if same-origin
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let resolved = match base_url.join(href) {
        Ok(url) => url,
        Err(e) => {
            tracing::trace!("Skipping malformed href {:?}: {}", href, e);
            return None;
        }
    };

    if !is_same_origin(&resolved, base_url) {
        tracing::trace!("Skipping cross-origin link {}", resolved);
        return None;
    }

    Some(resolved.into())
}
