//! Domain extraction from URL strings.
//!
//! The extracted domain is the grouping key for short keys and for the
//! per-domain hit counters.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Leftmost run of non-dot characters followed by any character and `com`,
/// optionally preceded by a dot that is not part of the capture.
static DOMAIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.?([^.]*.com)").expect("domain pattern is valid"));

/// Errors raised while deriving a domain from a URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("no .com domain found in '{0}'")]
    NoMatch(String),
}

/// Returns the bare domain of `url`, e.g. `google.com` for
/// `https://www.google.com/search`.
///
/// An empty input yields an empty domain.
///
/// # Errors
///
/// Returns [`DomainError::NoMatch`] when the URL contains no `.com` domain.
///
/// # Examples
///
/// ```
/// use linkpulse::utils::extract_domain::get_domain;
///
/// assert_eq!(get_domain("https://www.google.com/x").unwrap(), "google.com");
/// assert_eq!(get_domain("").unwrap(), "");
/// assert!(get_domain("https://example.org").is_err());
/// ```
pub fn get_domain(url: &str) -> Result<String, DomainError> {
    if url.is_empty() {
        debug!("URL cannot be empty");
        return Ok(String::new());
    }

    DOMAIN_REGEX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| DomainError::NoMatch(url.to_string()))
}
