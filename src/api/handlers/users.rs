//! User CRUD request handlers.
//!
//! Provides HTTP handlers for managing user preference records.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::USER_TAG;
use crate::api::dto::{
    CreateUserRequest, MessageResponse, UpdateUserByEmailRequest, UpdateUserRequest, UserResponse,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates user-related routes.
///
/// Routes:
/// - GET    /       - List all users
/// - POST   /       - Create a new user
/// - PUT    /       - Update a user looked up by email
/// - GET    /{id}   - Get user by id
/// - PUT    /{id}   - Replace user by id
/// - DELETE /{id}   - Delete user by id
pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_users, create_user, update_user_by_email))
        .routes(routes!(get_user, update_user, delete_user))
}

/// GET /api/users - List all users
#[utoipa::path(
    get,
    path = "",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All user records", body = Vec<UserResponse>)
    ),
    security(("bearerAuth" = []))
)]
async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.services.users.list_users();
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id} - Get user by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user record", body = UserResponse),
        (status = 404, description = "Unknown user id")
    ),
    security(("bearerAuth" = []))
)]
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users.get_user(id)?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /api/users - Create new user
///
/// The store assigns the id and rejects duplicate emails.
#[utoipa::path(
    post,
    path = "",
    tag = USER_TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request body"),
        (status = 409, description = "Email already registered")
    ),
    security(("bearerAuth" = []))
)]
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.services.users.create_user(payload.into_new_record())?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PUT /api/users - Update a user looked up by email
///
/// Replaces the preferences and, when provided, the telephone of the record
/// currently holding the given email.
#[utoipa::path(
    put,
    path = "",
    tag = USER_TAG,
    request_body = UpdateUserByEmailRequest,
    responses(
        (status = 200, description = "Updated record", body = UserResponse),
        (status = 404, description = "Unknown email")
    ),
    security(("bearerAuth" = []))
)]
async fn update_user_by_email(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateUserByEmailRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users.update_user_by_email(
        &payload.email,
        payload.preferences,
        payload.telephone,
    )?;
    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/users/{id} - Replace user by id
///
/// Any `userId` in the body is ignored; the path id is authoritative.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated record", body = UserResponse),
        (status = 404, description = "Unknown user id"),
        (status = 409, description = "Email already owned by another user")
    ),
    security(("bearerAuth" = []))
)]
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users.update_user(id, payload.into_record(id))?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/users/{id} - Delete user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "Unknown user id")
    ),
    security(("bearerAuth" = []))
)]
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.users.delete_user(id)?;
    Ok(Json(MessageResponse {
        message: format!("User {} preferences deleted successfully", id),
    }))
}
