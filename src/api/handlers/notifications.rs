//! Notification dispatch handler.

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::NOTIFICATION_TAG;
use crate::api::dto::{DispatchResponse, SendNotificationRequest};
use crate::error::AppResult;
use crate::state::AppState;

/// Creates notification-related routes.
///
/// Routes:
/// - POST /send - Dispatch a message to a user's enabled channels
pub fn notification_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(send_notification))
}

/// POST /api/notifications/send - Dispatch a message
///
/// Responds 200 with the aggregate result whenever the user exists; the
/// `success` field in the body is the delivery signal. Channel-level
/// transport failures never turn into an HTTP error.
#[utoipa::path(
    post,
    path = "/send",
    tag = NOTIFICATION_TAG,
    request_body = SendNotificationRequest,
    responses(
        (status = 200, description = "Aggregate dispatch outcome", body = DispatchResponse),
        (status = 404, description = "Unknown user id")
    ),
    security(("bearerAuth" = []))
)]
async fn send_notification(
    State(state): State<AppState>,
    Json(payload): Json<SendNotificationRequest>,
) -> AppResult<Json<DispatchResponse>> {
    let result = state.services.dispatch.send(payload.into_request()).await?;
    Ok(Json(DispatchResponse::from(result)))
}
