#![allow(dead_code)]

use axum_test::TestServer;
use linkpulse::infrastructure::persistence::{MemoryStore, PgStore};
use linkpulse::routes::app_router;
use linkpulse::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_memory_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (AppState::new(store.clone()), store)
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgStore::new(Arc::new(pool))))
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

pub async fn get_counter(pool: &PgPool, domain: &str) -> Option<i64> {
    sqlx::query_scalar("SELECT counter FROM metrics WHERE domain = $1")
        .bind(domain)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_metric(pool: &PgPool, domain: &str, counter: i64) {
    sqlx::query("INSERT INTO metrics (domain, counter) VALUES ($1, $2)")
        .bind(domain)
        .bind(counter)
        .execute(pool)
        .await
        .unwrap();
}
