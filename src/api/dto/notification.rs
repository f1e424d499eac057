//! Notification-related DTOs for API requests and responses.

use crate::services::dispatch::{DispatchRequest, DispatchResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to dispatch a message to a user's enabled channels.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationRequest {
    #[schema(example = 1)]
    pub user_id: i32,

    /// Message text; may be empty
    #[serde(default)]
    #[schema(example = "Assemble")]
    pub message: String,
}

impl SendNotificationRequest {
    pub fn into_request(self) -> DispatchRequest {
        DispatchRequest {
            user_id: self.user_id,
            message: self.message,
        }
    }
}

/// Aggregate dispatch outcome returned to the caller.
///
/// The HTTP status of a dispatch is 200 whenever the user exists; this
/// body's `success` field is the true delivery signal.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResponse {
    pub success: bool,
    pub message: String,
    pub user_id: i32,
}

impl From<DispatchResult> for DispatchResponse {
    fn from(result: DispatchResult) -> Self {
        Self {
            success: result.success,
            message: result.message,
            user_id: result.user_id,
        }
    }
}
