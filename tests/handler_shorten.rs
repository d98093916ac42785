mod common;

use axum::http::StatusCode;
use linkpulse::api::dto::ErrorBody;
use linkpulse::api::dto::shorten::ShortenResponse;
use linkpulse::domain::repositories::UrlStore;
use linkpulse::utils::code_generator::short_key;

#[tokio::test]
async fn test_shorten_url_success() {
    let (state, store) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server.post("/short/www.google.com").await;

    response.assert_status(StatusCode::CREATED);
    let body: ShortenResponse = response.json();
    assert_eq!(body.short_url, short_key("https://www.google.com").unwrap());
    assert!(body.short_url.starts_with("google.com/"));

    assert_eq!(
        store.get_by_url("https://www.google.com").await,
        Some(body.short_url)
    );
}

#[tokio::test]
async fn test_shorten_same_url_twice_counts_once() {
    let (state, store) = common::create_memory_state();
    let server = common::create_test_server(state);

    let first: ShortenResponse = server.post("/short/www.google.com").await.json();
    let second: ShortenResponse = server.post("/short/www.google.com").await.json();

    assert_eq!(first, second);
    assert_eq!(store.domain_counter("google.com").await, Some(1));
}

#[tokio::test]
async fn test_shorten_different_urls_same_domain() {
    let (state, store) = common::create_memory_state();
    let server = common::create_test_server(state);

    let first: ShortenResponse = server.post("/short/www.google.com").await.json();
    let second: ShortenResponse = server.post("/short/www.google.com/maps").await.json();

    assert_ne!(first, second);
    assert_eq!(store.domain_counter("google.com").await, Some(2));
}

#[tokio::test]
async fn test_shorten_with_scheme_and_query() {
    let (state, store) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/short/https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await;

    response.assert_status(StatusCode::CREATED);
    assert!(
        store
            .get_by_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .is_some()
    );
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (state, _store) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server.post("/short/").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&ErrorBody::new("URL is Empty!"));
}

#[tokio::test]
async fn test_shorten_wrong_method() {
    let (state, _store) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server.get("/short/www.google.com").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_json(&ErrorBody::new("Method not Supported!"));
}

#[tokio::test]
async fn test_shorten_unsupported_domain() {
    let (state, store) = common::create_memory_state();
    let server = common::create_test_server(state);

    let response = server.post("/short/www.rust-lang.org").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&ErrorBody::new("Domain not Supported!"));
    assert!(store.get_top_three_domains().await.is_empty());
}
