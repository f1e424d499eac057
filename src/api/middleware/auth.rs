//! Static bearer-token authentication middleware.
//!
//! Every `/api` route requires `Authorization: Bearer <token>` where the
//! token matches the configured value.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Bearer-token authentication middleware
///
/// # Errors
/// Returns 401 Unauthorized if:
/// - Authorization header is missing
/// - Header does not use the `Bearer <token>` format
/// - The token does not match the configured value
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized {
            message: "Missing authorization header".to_string(),
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized {
            message: "Invalid authorization header format. Expected: Bearer <token>".to_string(),
        })?;

    if token != state.auth.token {
        return Err(AppError::Unauthorized {
            message: "Invalid authorization token".to_string(),
        });
    }

    Ok(next.run(request).await)
}
