//! Handler for the top domains endpoint.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::dto::metrics::DomainMetricItem;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the three most shortened domains.
///
/// # Endpoint
///
/// `GET /metrics/`
///
/// # Response
///
/// `200 OK` with a JSON array indented by one space:
///
/// ```json
/// [
///  {
///   "domain": "youtube.com",
///   "counter": 3
///  }
/// ]
/// ```
///
/// The array is empty when nothing has been shortened yet.
pub async fn metrics_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let items: Vec<DomainMetricItem> = state
        .store
        .get_top_three_domains()
        .await
        .into_iter()
        .map(DomainMetricItem::from)
        .collect();

    let body = to_indented_json(&items)
        .map_err(|e| AppError::internal(format!("Failed to encode metrics: {e}")))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Serializes `value` as JSON indented with a single space per level.
pub fn to_indented_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}
