//! Store trait for short key data access.

use crate::domain::entities::DomainMetric;
use async_trait::async_trait;

/// Storage interface for URL ↔ short key pairs and per-domain counters.
///
/// Lookups report absence as `None`; writes report failure as `false` after the
/// implementation has logged the cause. Callers never see backend errors.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process maps behind one lock
/// - [`crate::infrastructure::persistence::PgStore`] - PostgreSQL with transactional writes
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Associates `url` with `short_key` and bumps the counter of the URL's domain.
    ///
    /// An existing association for `url` is overwritten. No deduplication happens
    /// here: creating the same URL twice succeeds twice and counts twice.
    ///
    /// Returns `false` if anything could not be persisted.
    async fn create(&self, url: &str, short_key: &str) -> bool;

    /// Returns the short key stored for `url`.
    ///
    /// `None` for an empty `url` or when nothing is stored.
    async fn get_by_url(&self, url: &str) -> Option<String>;

    /// Returns the original URL stored for `short_key`.
    ///
    /// `None` for an empty `short_key` or when nothing is stored.
    async fn get_by_short_url(&self, short_key: &str) -> Option<String>;

    /// Returns up to three domains ordered by counter, highest first.
    ///
    /// Ties keep the order in which domains were first seen. Empty when no
    /// domain has been shortened yet.
    async fn get_top_three_domains(&self) -> Vec<DomainMetric>;

    /// Short backend name for logs and health reporting.
    fn backend_name(&self) -> &'static str;
}
