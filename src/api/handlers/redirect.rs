//! Handler for short key redirect.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::path_tail;

/// Route prefix; everything after it is the short key.
pub const REDIRECT_PREFIX: &str = "/redirect/";

/// Redirects a short key to its original URL.
///
/// # Endpoint
///
/// `GET /redirect/{shortKey}` where the key has the form `domain/hash8`.
///
/// # Response
///
/// `301 Moved Permanently` with the stored URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found (plain text) if the key is empty or unknown.
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let key = path_tail(&uri, REDIRECT_PREFIX);
    if key.is_empty() {
        return Err(AppError::not_found("Short key is missing"));
    }

    let url = state
        .store
        .get_by_short_url(key)
        .await
        .ok_or_else(|| AppError::not_found("Shorten URL not found"))?;

    debug!("Redirecting {} to {}", key, url);

    let location = HeaderValue::try_from(url)
        .map_err(|_| AppError::internal("Stored URL is not a valid Location header"))?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
