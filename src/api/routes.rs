//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Json, Router, middleware, routing::get};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{auth_middleware, logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `/api/users` - User CRUD operations (bearer auth)
/// - `/api/notifications` - Dispatch endpoint (bearer auth)
/// - `/health` - Health checks (unauthenticated)
/// - `/api-docs/openapi.json` - OpenAPI document
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first): request IDs are assigned before logging, and auth wraps only the
/// `/api` routes.
pub fn create_router(state: AppState) -> Router {
    let (api_router, api_paths) = OpenApiRouter::new()
        .nest("/api/users", handlers::users::user_routes())
        .nest(
            "/api/notifications",
            handlers::notifications::notification_routes(),
        )
        .split_for_parts();
    let api_router = api_router.layer(middleware::from_fn_with_state(
        state.clone(),
        auth_middleware,
    ));

    let (health_router, health_paths) = OpenApiRouter::new()
        .merge(handlers::health::health_routes())
        .split_for_parts();

    let mut api_doc = ApiDoc::openapi();
    api_doc.merge(api_paths);
    api_doc.merge(health_paths);

    let doc = Json(api_doc);
    api_router
        .merge(health_router)
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let doc = doc.clone();
                async move { doc }
            }),
        )
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;
    use crate::services::dispatch::{Channel, ChannelOutcome, ChannelSender};
    use crate::store::{PreferenceStore, seed_records};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    struct StubSender {
        email_calls: AtomicUsize,
        sms_calls: AtomicUsize,
    }

    impl StubSender {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                email_calls: AtomicUsize::new(0),
                sms_calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ChannelSender for StubSender {
        async fn send_email(&self, _address: &str, _message: &str) -> ChannelOutcome {
            self.email_calls.fetch_add(1, Ordering::SeqCst);
            ChannelOutcome::success(Channel::Email, "queued")
        }

        async fn send_sms(&self, _phone: &str, _message: &str) -> ChannelOutcome {
            self.sms_calls.fetch_add(1, Ordering::SeqCst);
            ChannelOutcome::success(Channel::Sms, "queued")
        }
    }

    fn test_router(sender: Arc<StubSender>) -> Router {
        let state = AppState::new(
            PreferenceStore::from_records(seed_records()),
            sender,
            AuthConfig {
                token: "secret".to_string(),
            },
        );
        create_router(state)
    }

    fn authorized(method: Method, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, "Bearer secret");
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        builder.body(body).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_api_requires_bearer_token() {
        let router = test_router(StubSender::new());
        let request = Request::builder()
            .uri("/api/users")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_health_is_unauthenticated() {
        let router = test_router(StubSender::new());
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_users_returns_seed_set() {
        let router = test_router(StubSender::new());
        let response = router
            .oneshot(authorized(Method::GET, "/api/users", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_get_unknown_user_is_404() {
        let router = test_router(StubSender::new());
        let response = router
            .oneshot(authorized(Method::GET, "/api/users/99", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_user_assigns_id() {
        let router = test_router(StubSender::new());
        let response = router
            .oneshot(authorized(
                Method::POST,
                "/api/users",
                Some(serde_json::json!({
                    "email": "thor@avengers.com",
                    "telephone": "+123456785",
                    "preferences": {"email": true, "sms": false}
                })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["userId"], 5);
    }

    #[tokio::test]
    async fn test_create_duplicate_email_is_conflict() {
        let router = test_router(StubSender::new());
        let response = router
            .oneshot(authorized(
                Method::POST,
                "/api/users",
                Some(serde_json::json!({
                    "email": "ironman@avengers.com",
                    "telephone": "+1",
                    "preferences": {"email": true, "sms": true}
                })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let json = body_json(response).await;
        assert_eq!(json["code"], "DUPLICATE_ENTRY");
    }

    #[tokio::test]
    async fn test_create_invalid_email_is_bad_request() {
        let router = test_router(StubSender::new());
        let response = router
            .oneshot(authorized(
                Method::POST,
                "/api/users",
                Some(serde_json::json!({
                    "email": "not-an-email",
                    "telephone": "+1",
                    "preferences": {"email": true, "sms": true}
                })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_send_notification_end_to_end() {
        let sender = StubSender::new();
        let router = test_router(sender.clone());

        // Seed user 2 has email enabled and SMS disabled
        let response = router
            .oneshot(authorized(
                Method::POST,
                "/api/notifications/send",
                Some(serde_json::json!({"userId": 2, "message": "hi"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["userId"], 2);
        assert_eq!(sender.email_calls.load(Ordering::SeqCst), 1);
        assert_eq!(sender.sms_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_send_notification_unknown_user_is_404() {
        let router = test_router(StubSender::new());
        let response = router
            .oneshot(authorized(
                Method::POST,
                "/api/notifications/send",
                Some(serde_json::json!({"userId": 999, "message": "hi"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let router = test_router(StubSender::new());
        let request = Request::builder()
            .uri("/api-docs/openapi.json")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["info"]["title"], "Courier");
    }
}
