//! Middleware components for the HTTP API.

mod auth;
mod error_handler;
mod logging;
mod request_id;

pub use auth::auth_middleware;
pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
