mod common;

use linkpulse::domain::entities::DomainMetric;
use linkpulse::domain::repositories::UrlStore;
use linkpulse::infrastructure::persistence::PgStore;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create(pool: PgPool) {
    let store = PgStore::new(Arc::new(pool.clone()));

    assert!(
        store
            .create("https://www.google.com", "google.com/7378mDnD")
            .await
    );
    assert_eq!(common::count_urls(&pool).await, 1);
    assert_eq!(common::get_counter(&pool, "google.com").await, Some(1));
}

#[sqlx::test]
async fn test_create_existing_domain_increments_counter(pool: PgPool) {
    let store = PgStore::new(Arc::new(pool.clone()));

    assert!(
        store
            .create("https://www.google.com", "google.com/AAAAAAAA")
            .await
    );
    assert!(
        store
            .create("https://www.google.com/x", "google.com/BBBBBBBB")
            .await
    );

    assert_eq!(common::get_counter(&pool, "google.com").await, Some(2));
}

#[sqlx::test]
async fn test_duplicate_create_keeps_one_record(pool: PgPool) {
    let store = PgStore::new(Arc::new(pool.clone()));
    let url = "https://www.google.com";

    assert!(store.create(url, "google.com/AAAAAAAA").await);
    assert!(store.create(url, "google.com/BBBBBBBB").await);

    assert_eq!(common::count_urls(&pool).await, 1);
    assert_eq!(common::get_counter(&pool, "google.com").await, Some(2));
    assert_eq!(
        store.get_by_url(url).await.as_deref(),
        Some("google.com/BBBBBBBB")
    );
}

#[sqlx::test]
async fn test_create_without_domain_writes_nothing(pool: PgPool) {
    let store = PgStore::new(Arc::new(pool.clone()));

    assert!(!store.create("https://example.org", "x/AAAAAAAA").await);
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_rolls_back_on_failure(pool: PgPool) {
    sqlx::query("ALTER TABLE metrics ADD CONSTRAINT no_google CHECK (domain <> 'google.com')")
        .execute(&pool)
        .await
        .unwrap();

    let store = PgStore::new(Arc::new(pool.clone()));

    assert!(
        !store
            .create("https://www.google.com", "google.com/7378mDnD")
            .await
    );
    assert_eq!(common::count_urls(&pool).await, 0);
    assert_eq!(store.get_by_url("https://www.google.com").await, None);
}

#[sqlx::test]
async fn test_get_by_url_and_short_url(pool: PgPool) {
    let store = PgStore::new(Arc::new(pool));
    let url = "https://www.google.com";
    store.create(url, "google.com/7378mDnD").await;

    assert_eq!(
        store.get_by_url(url).await.as_deref(),
        Some("google.com/7378mDnD")
    );
    assert_eq!(
        store.get_by_short_url("google.com/7378mDnD").await.as_deref(),
        Some(url)
    );

    let record = store.find_record(url).await.unwrap().unwrap();
    assert_eq!(record.domain, "google.com");
}

#[sqlx::test]
async fn test_shared_short_key_resolves_to_latest_write(pool: PgPool) {
    let store = PgStore::new(Arc::new(pool));
    let key = "google.com/SAMEKEY0";

    assert!(store.create("https://www.google.com/a", key).await);
    assert!(store.create("https://www.google.com/b", key).await);
    assert_eq!(
        store.get_by_short_url(key).await.as_deref(),
        Some("https://www.google.com/b")
    );

    assert!(store.create("https://www.google.com/a", key).await);
    assert_eq!(
        store.get_by_short_url(key).await.as_deref(),
        Some("https://www.google.com/a")
    );

    assert!(
        store
            .create("https://www.google.com/a", "google.com/OTHERKEY")
            .await
    );
    assert_eq!(
        store.get_by_short_url(key).await.as_deref(),
        Some("https://www.google.com/b")
    );
}

#[sqlx::test]
async fn test_lookups_empty_and_missing(pool: PgPool) {
    let store = PgStore::new(Arc::new(pool));

    assert_eq!(store.get_by_url("").await, None);
    assert_eq!(store.get_by_url("https://www.google.com").await, None);
    assert_eq!(store.get_by_short_url("").await, None);
    assert_eq!(store.get_by_short_url("google.com/missing1").await, None);
}

#[sqlx::test]
async fn test_top_three_domains(pool: PgPool) {
    common::insert_metric(&pool, "google.com", 2).await;
    common::insert_metric(&pool, "infracloud.com", 2).await;
    common::insert_metric(&pool, "youtube.com", 3).await;
    common::insert_metric(&pool, "facebook.com", 1).await;

    let store = PgStore::new(Arc::new(pool));

    assert_eq!(
        store.get_top_three_domains().await,
        vec![
            DomainMetric::new("youtube.com", 3),
            DomainMetric::new("google.com", 2),
            DomainMetric::new("infracloud.com", 2),
        ]
    );
}

#[sqlx::test]
async fn test_top_three_domains_partial_and_empty(pool: PgPool) {
    let store = PgStore::new(Arc::new(pool.clone()));
    assert!(store.get_top_three_domains().await.is_empty());

    common::insert_metric(&pool, "infracloud.com", 2).await;
    common::insert_metric(&pool, "youtube.com", 3).await;

    assert_eq!(
        store.get_top_three_domains().await,
        vec![
            DomainMetric::new("youtube.com", 3),
            DomainMetric::new("infracloud.com", 2),
        ]
    );
}

#[sqlx::test]
async fn test_shorten_endpoint_with_pg_store(pool: PgPool) {
    let server = common::create_test_server(common::create_pg_state(pool.clone()));

    let first = server.post("/short/www.google.com").await;
    let second = server.post("/short/www.google.com").await;

    assert_eq!(first.text(), second.text());
    assert_eq!(common::get_counter(&pool, "google.com").await, Some(1));
}
