//! Store trait definitions for the domain layer.
//!
//! The handlers depend only on [`UrlStore`]; concrete backends live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.

pub mod url_store;

pub use url_store::UrlStore;

#[cfg(test)]
pub use url_store::MockUrlStore;
