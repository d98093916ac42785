//! PostgreSQL implementation of the URL store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, error};

use crate::domain::entities::{DomainMetric, UrlRecord};
use crate::domain::repositories::UrlStore;
use crate::utils::extract_domain::get_domain;

/// PostgreSQL store backed by the `url` and `metrics` tables.
///
/// Writes run in a transaction so a URL record never exists without the matching
/// counter increment. Counter ties in the top-three query are broken by `id`,
/// which follows first-seen order. Every write also takes a fresh `seq`, so a
/// short key shared by several URLs resolves to the most recently written one.
pub struct PgStore {
    pool: Arc<PgPool>,
}

impl PgStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Upserts the URL record and increments the domain counter atomically.
    ///
    /// An uncommitted transaction is rolled back when dropped, so any `?` exit
    /// leaves both tables untouched.
    pub async fn insert_with_counter(&self, record: &UrlRecord) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO url (url, short_url, domain)
            VALUES ($1, $2, $3)
            ON CONFLICT (url) DO UPDATE
            SET short_url = EXCLUDED.short_url, domain = EXCLUDED.domain, seq = DEFAULT
            "#,
        )
        .bind(&record.url)
        .bind(&record.short_url)
        .bind(&record.domain)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO metrics (domain, counter)
            VALUES ($1, 1)
            ON CONFLICT (domain) DO UPDATE
            SET counter = metrics.counter + 1
            "#,
        )
        .bind(&record.domain)
        .execute(&mut *tx)
        .await?;

        tx.commit().await
    }

    /// Fetches the full record stored for `url`.
    pub async fn find_record(&self, url: &str) -> Result<Option<UrlRecord>, sqlx::Error> {
        let row: Option<(String, String, String)> =
            sqlx::query_as("SELECT url, short_url, domain FROM url WHERE url = $1")
                .bind(url)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(|(url, short_url, domain)| UrlRecord::new(url, short_url, domain)))
    }

    async fn top_three(&self) -> Result<Vec<DomainMetric>, sqlx::Error> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT domain, counter
            FROM metrics
            ORDER BY counter DESC, id ASC
            LIMIT 3
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(domain, counter)| DomainMetric::new(domain, counter))
            .collect())
    }
}

#[async_trait]
impl UrlStore for PgStore {
    async fn create(&self, url: &str, short_key: &str) -> bool {
        let domain = match get_domain(url) {
            Ok(domain) => domain,
            Err(e) => {
                error!("Refusing to store {}: {}", url, e);
                return false;
            }
        };

        let record = UrlRecord::new(url.to_string(), short_key.to_string(), domain);
        match self.insert_with_counter(&record).await {
            Ok(()) => true,
            Err(e) => {
                error!("Transaction for {} aborted: {}", url, e);
                false
            }
        }
    }

    async fn get_by_url(&self, url: &str) -> Option<String> {
        if url.is_empty() {
            debug!("Url can not be empty");
            return None;
        }

        match self.find_record(url).await {
            Ok(record) => record.map(|r| r.short_url),
            Err(e) => {
                error!("Lookup of {} failed: {}", url, e);
                None
            }
        }
    }

    async fn get_by_short_url(&self, short_key: &str) -> Option<String> {
        if short_key.is_empty() {
            debug!("Short key can not be empty");
            return None;
        }

        let row: Result<Option<(String,)>, _> = sqlx::query_as(
            "SELECT url FROM url WHERE short_url = $1 ORDER BY seq DESC LIMIT 1",
        )
        .bind(short_key)
        .fetch_optional(self.pool.as_ref())
        .await;

        match row {
            Ok(row) => row.map(|(url,)| url),
            Err(e) => {
                error!("Lookup of short key {} failed: {}", short_key, e);
                None
            }
        }
    }

    async fn get_top_three_domains(&self) -> Vec<DomainMetric> {
        self.top_three().await.unwrap_or_else(|e| {
            error!("Failed to read domain metrics: {}", e);
            Vec::new()
        })
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
