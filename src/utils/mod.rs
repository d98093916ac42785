//! Utility functions for domain extraction, short key generation and URL handling.
//!
//! - [`extract_domain`] - Domain extraction from URL strings
//! - [`code_generator`] - Deterministic short key generation
//! - [`url_normalizer`] - Scheme normalization and route tail extraction

pub mod code_generator;
pub mod extract_domain;
pub mod url_normalizer;
