//! Error handler for converting AppError to HTTP responses.
//!
//! Implements IntoResponse for AppError so handlers can return `AppResult`
//! directly and still produce consistent error bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - Duplicate → 409 CONFLICT
    /// - Validation / ValidationErrors → 400 BAD_REQUEST
    /// - BadRequest → 400 BAD_REQUEST
    /// - Unauthorized → 401 UNAUTHORIZED
    /// - Configuration → 500 INTERNAL_SERVER_ERROR
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NOT_FOUND", &self.to_string()).with_details(json!({
                    "entity": entity,
                    "field": field,
                    "value": value,
                })),
            ),
            AppError::Duplicate {
                entity,
                field,
                value,
            } => (
                StatusCode::CONFLICT,
                ErrorResponse::new("DUPLICATE_ENTRY", &self.to_string()).with_details(json!({
                    "entity": entity,
                    "field": field,
                    "value": value,
                })),
            ),
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_ERROR", &self.to_string()).with_details(json!({
                    "field": field,
                    "reason": reason,
                })),
            ),
            AppError::ValidationErrors { errors } => {
                let details: Vec<_> = errors
                    .iter()
                    .map(|e| json!({"field": e.field, "message": e.message}))
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("VALIDATION_ERROR", "Request validation failed")
                        .with_details(json!(details)),
                )
            }
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", message),
            ),
            AppError::Unauthorized { message } => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("UNAUTHORIZED", message),
            ),
            AppError::Configuration { key, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(
                    "CONFIGURATION_ERROR",
                    &format!("Configuration error: {}", key),
                ),
            ),
            AppError::Internal { source } => {
                tracing::error!(error = %source, "Unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound {
            entity: "user".to_string(),
            field: "id".to_string(),
            value: "9".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_maps_to_409() {
        let response = AppError::Duplicate {
            entity: "user".to_string(),
            field: "email".to_string(),
            value: "a@x.com".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let response = AppError::Unauthorized {
            message: "nope".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_is_sanitized() {
        let response = AppError::Internal {
            source: anyhow::anyhow!("secret database path"),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
