//! Application error type and its HTTP representation.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorBody;
use crate::utils::extract_domain::DomainError;

/// Errors surfaced by the request handlers.
///
/// Every variant is turned into a response at the handler boundary; none of
/// them terminate the process.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Unknown or missing short key. Rendered as a newline-terminated plain
    /// text body with `X-Content-Type-Options: nosniff`.
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Method not Supported!")]
    MethodNotAllowed,

    #[error("{0}")]
    Persistence(String),

    #[error("Domain not Supported!")]
    Extraction(#[from] DomainError),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidInput(_)
            | AppError::Persistence(_)
            | AppError::Extraction(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        match self {
            AppError::NotFound(_) => (
                status,
                [(header::X_CONTENT_TYPE_OPTIONS, "nosniff")],
                format!("{message}\n"),
            )
                .into_response(),
            AppError::MethodNotAllowed => {
                let mut response = (status, Json(ErrorBody::new(message))).into_response();
                response
                    .headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static("POST"));
                response
            }
            _ => (status, Json(ErrorBody::new(message))).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::invalid_input("URL is Empty!").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::persistence("Failed to Shorten the URl!").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_extraction_message() {
        let err = AppError::from(DomainError::NoMatch("https://example.org".to_string()));
        assert_eq!(err.to_string(), "Domain not Supported!");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let response = AppError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
    }

    #[test]
    fn test_not_found_is_plain_text() {
        let response = AppError::not_found("Short key is missing").into_response();
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
    }
}
