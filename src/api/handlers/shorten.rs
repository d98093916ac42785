//! Handler for the URL shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode, Uri},
};
use tracing::{debug, info};

use crate::api::dto::shorten::ShortenResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::short_key;
use crate::utils::url_normalizer::{ensure_https, tail_with_query};

/// Route prefix; everything after it is the URL to shorten.
pub const SHORT_PREFIX: &str = "/short/";

/// Returns the short key for the URL embedded in the request path.
///
/// # Endpoint
///
/// `POST /short/{url}`
///
/// # Request Flow
///
/// 1. Reject anything but `POST`
/// 2. Take the raw path (and query) after `/short/`, prefixing `https://` if absent
/// 3. Return the stored key if the URL was shortened before
/// 4. Otherwise derive the key, store it and return it
///
/// # Response
///
/// `201 Created` with `{"short_url": "google.com/7378mDnD"}` for both new and
/// already-known URLs.
///
/// The lookup and the write are separate store calls, so two concurrent
/// requests for the same unseen URL may both write and count the domain twice.
///
/// # Errors
///
/// - 405 `{"Error":"Method not Supported!"}` for non-POST requests
/// - 500 `{"Error":"URL is Empty!"}` when nothing follows the prefix
/// - 500 `{"Error":"Domain not Supported!"}` when no `.com` domain is present
/// - 500 `{"Error":"Failed to Shorten the URl!"}` when the store rejects the write
pub async fn shorten_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let raw = tail_with_query(&uri, SHORT_PREFIX);
    if raw.is_empty() {
        return Err(AppError::invalid_input("URL is Empty!"));
    }

    let url = ensure_https(raw);

    if let Some(existing) = state.store.get_by_url(&url).await {
        debug!("{} already shortened as {}", url, existing);
        return Ok((StatusCode::CREATED, Json(ShortenResponse::new(existing))));
    }

    let key = short_key(&url)?;

    if !state.store.create(&url, &key).await {
        return Err(AppError::persistence("Failed to Shorten the URl!"));
    }

    info!("Shortened {} to {}", url, key);
    Ok((StatusCode::CREATED, Json(ShortenResponse::new(key))))
}
