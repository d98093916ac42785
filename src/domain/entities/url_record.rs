//! URL record entity representing a shortened URL mapping.

/// Association between an original URL and its short key.
///
/// Records are created on the first shortening of a distinct URL and are never
/// deleted. At most one record exists per `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub url: String,
    pub short_url: String,
    pub domain: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(url: String, short_url: String, domain: String) -> Self {
        Self {
            url,
            short_url,
            domain,
        }
    }
}
