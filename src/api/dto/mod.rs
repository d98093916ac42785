//! Data Transfer Objects for API responses.
//!
//! All DTOs use Serde for JSON serialization.

pub mod health;
pub mod metrics;
pub mod shorten;

use serde::{Deserialize, Serialize};

/// JSON error envelope: `{"Error": "<message>"}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(rename = "Error")]
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
