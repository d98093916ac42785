//! Deterministic short key generation.
//!
//! A short key has the form `<domain>/<hash8>` where `hash8` is the first eight
//! characters of the URL-safe base64 encoding of the SHA-1 digest of the URL.

use base64::Engine as _;
use sha1::{Digest, Sha1};

use crate::utils::extract_domain::{DomainError, get_domain};

/// Number of encoded digest characters kept in a short key.
pub const HASH_LENGTH: usize = 8;

/// Computes the short key for `url`.
///
/// The same URL always produces the same key. Distinct URLs may collide; no
/// collision handling is attempted.
///
/// # Errors
///
/// Returns [`DomainError`] if no domain can be extracted from `url`.
///
/// # Examples
///
/// ```
/// use linkpulse::utils::code_generator::short_key;
///
/// let key = short_key("https://www.google.com").unwrap();
/// assert!(key.starts_with("google.com/"));
/// assert_eq!(key, short_key("https://www.google.com").unwrap());
/// ```
pub fn short_key(url: &str) -> Result<String, DomainError> {
    let domain = get_domain(url)?;
    Ok(format!("{}/{}", domain, url_hash(url)))
}

/// First [`HASH_LENGTH`] characters of `base64url(sha1(url))`.
fn url_hash(url: &str) -> String {
    let digest = Sha1::digest(url.as_bytes());
    let mut encoded = base64::engine::general_purpose::URL_SAFE.encode(digest);
    encoded.truncate(HASH_LENGTH);
    encoded
}
