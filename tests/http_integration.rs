//! Integration tests for the HTTP surface: health, info and CORS.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use planning_poker::adapters::http::{HealthResponse, InfoResponse};
use planning_poker::adapters::{app_router, ConnectionRegistry, OriginPolicy, ServiceInfo, WebSocketState};
use planning_poker::application::SessionCoordinator;
use planning_poker::config::Environment;

fn app(environment: Environment, policy: OriginPolicy) -> Router {
    let connections = Arc::new(ConnectionRegistry::with_default_capacity());
    let (session, _task) = SessionCoordinator::new(connections.clone()).spawn(16);
    app_router(
        ServiceInfo { environment },
        WebSocketState::new(connections, session, policy),
    )
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok_with_timestamp() {
    let response = app(Environment::Development, OriginPolicy::Any)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: HealthResponse = body_json(response).await;
    assert_eq!(body.status, "ok");
    assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
}

#[tokio::test]
async fn root_returns_service_info() {
    let response = app(Environment::Production, OriginPolicy::AllowList(vec![]))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: InfoResponse = body_json(response).await;
    assert_eq!(body.message, "Planning Poker API");
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(body.environment, "production");
}

#[tokio::test]
async fn websocket_route_requires_upgrade() {
    let response = app(Environment::Development, OriginPolicy::Any)
        .oneshot(Request::builder().uri("/ws").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = app(Environment::Development, OriginPolicy::Any)
        .oneshot(Request::builder().uri("/rooms").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/health")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn development_cors_allows_any_origin() {
    let response = app(Environment::Development, OriginPolicy::Any)
        .oneshot(preflight("http://localhost:5173"))
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn production_cors_only_echoes_listed_origin() {
    let policy = OriginPolicy::AllowList(vec!["https://poker.example.com".to_string()]);

    let allowed = app(Environment::Production, policy.clone())
        .oneshot(preflight("https://poker.example.com"))
        .await
        .unwrap();
    assert_eq!(
        allowed.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://poker.example.com"
    );

    let denied = app(Environment::Production, policy)
        .oneshot(preflight("https://evil.example.com"))
        .await
        .unwrap();
    assert!(denied.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
