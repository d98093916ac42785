//! DTOs for the URL shortening endpoint.

use serde::{Deserialize, Serialize};

/// Successful shortening result.
///
/// ```json
/// {"short_url": "google.com/7378mDnD"}
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub short_url: String,
}

impl ShortenResponse {
    pub fn new(short_url: impl Into<String>) -> Self {
        Self {
            short_url: short_url.into(),
        }
    }
}
