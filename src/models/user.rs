use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-channel opt-in flags for a user.
///
/// The two flags are independent; both may be false, in which case a dispatch
/// for the user is a defined no-op rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChannelPreferences {
    pub email: bool,
    pub sms: bool,
}

impl ChannelPreferences {
    /// True when neither channel is enabled.
    pub fn all_disabled(&self) -> bool {
        !self.email && !self.sms
    }
}

/// A user's contact record as held by the preference store.
///
/// The id is assigned by the store on create and is immutable afterwards;
/// the email is unique across all records at any instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i32,
    pub email: String,
    pub phone: String,
    pub preferences: ChannelPreferences,
}

/// Input for creating a user record; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub email: String,
    pub phone: String,
    pub preferences: ChannelPreferences,
}
