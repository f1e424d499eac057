//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `user` - User-related request/response DTOs
//! - `notification` - Dispatch request/response DTOs
//! - `error` - Common error response DTOs

mod error;
mod notification;
mod user;

pub use error::ErrorResponse;
pub use notification::{DispatchResponse, SendNotificationRequest};
pub use user::{
    CreateUserRequest, MessageResponse, UpdateUserByEmailRequest, UpdateUserRequest, UserResponse,
};
