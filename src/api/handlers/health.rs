//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports liveness and the active store backend.
///
/// # Endpoint
///
/// `GET /health`
///
/// ```json
/// {"status": "healthy", "version": "0.1.0", "store": "memory"}
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.store.backend_name().to_string(),
    })
}
