//! User-related DTOs for API requests and responses.

use crate::models::{ChannelPreferences, NewUserRecord, UserRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a user record.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: String,
    #[validate(length(min = 1, message = "Telephone is required"))]
    pub telephone: String,
    pub preferences: ChannelPreferences,
}

impl CreateUserRequest {
    /// Converts the request DTO into a NewUserRecord for the store.
    pub fn into_new_record(self) -> NewUserRecord {
        NewUserRecord {
            email: self.email,
            phone: self.telephone,
            preferences: self.preferences,
        }
    }
}

/// Request body for replacing a user record by id.
///
/// A `userId` in the body is accepted but ignored; the path id wins.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub user_id: Option<i32>,
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: String,
    #[validate(length(min = 1, message = "Telephone is required"))]
    pub telephone: String,
    pub preferences: ChannelPreferences,
}

impl UpdateUserRequest {
    /// Converts the request DTO into the record stored under `id`.
    pub fn into_record(self, id: i32) -> UserRecord {
        UserRecord {
            id,
            email: self.email,
            phone: self.telephone,
            preferences: self.preferences,
        }
    }
}

/// Request body for updating preferences by email.
///
/// `telephone` is a real option: absent means "leave unchanged".
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateUserByEmailRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: String,
    pub telephone: Option<String>,
    pub preferences: ChannelPreferences,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for a user record.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i32,
    pub email: String,
    pub telephone: String,
    pub preferences: ChannelPreferences,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            user_id: record.id,
            email: record.email,
            telephone: record.phone,
            preferences: record.preferences,
        }
    }
}

/// Generic confirmation message body.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
