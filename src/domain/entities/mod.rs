//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A URL and the short key it was assigned
//! - [`DomainMetric`] - How many shortenings a domain has received

pub mod domain_metric;
pub mod url_record;

pub use domain_metric::{DomainMetric, top_three};
pub use url_record::UrlRecord;
