//! URL normalization helpers shared by the request handlers.
//!
//! Shortening works on the raw text following a route prefix, so normalization
//! is kept to the minimum that makes keys stable: an `https://` scheme prefix.

use axum::http::Uri;

/// Scheme prepended to URLs submitted without one.
pub const HTTPS_SCHEME: &str = "https://";

/// Prefixes `https://` unless `url` already starts with it.
///
/// # Examples
///
/// ```
/// use linkpulse::utils::url_normalizer::ensure_https;
///
/// assert_eq!(ensure_https("www.google.com"), "https://www.google.com");
/// assert_eq!(ensure_https("https://www.google.com"), "https://www.google.com");
/// ```
pub fn ensure_https(url: &str) -> String {
    if url.starts_with(HTTPS_SCHEME) {
        url.to_string()
    } else {
        format!("{HTTPS_SCHEME}{url}")
    }
}

/// Returns everything after `prefix` in the request path, query included.
///
/// Returns an empty string when the path does not start with `prefix` or nothing
/// follows it.
pub fn tail_with_query<'a>(uri: &'a Uri, prefix: &str) -> &'a str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .and_then(|s| s.strip_prefix(prefix))
        .unwrap_or("")
}

/// Returns everything after `prefix` in the request path, query excluded.
pub fn path_tail<'a>(uri: &'a Uri, prefix: &str) -> &'a str {
    uri.path().strip_prefix(prefix).unwrap_or("")
}
