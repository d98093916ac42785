//! API route table.

use crate::api::handlers::{health_handler, metrics_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{any, get},
};

/// All public routes.
///
/// # Endpoints
///
/// - `GET        /redirect/{shortKey}` - 301 to the stored URL
/// - `POST       /short/{url}`         - Shorten a URL (other methods get a JSON 405)
/// - `GET        /metrics/`            - Top three domains
/// - `GET        /health`              - Liveness and backend name
///
/// The bare prefixes (`/redirect/`, `/short/`) are routed to the same handlers so
/// an empty key or URL gets the handler's own error rather than a router 404.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/redirect/", get(redirect_handler))
        .route("/redirect/{*key}", get(redirect_handler))
        .route("/short/", any(shorten_handler))
        .route("/short/{*url}", any(shorten_handler))
        .route("/metrics", get(metrics_handler))
        .route("/metrics/", get(metrics_handler))
        .route("/health", get(health_handler))
}
