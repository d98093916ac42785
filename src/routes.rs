//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /redirect/{shortKey}` - Short key redirect
//! - `POST /short/{url}`         - URL shortening
//! - `GET  /metrics/`            - Top three domains
//! - `GET  /health`              - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(tracing::layer())
}
