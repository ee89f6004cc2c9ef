//! Liveness and service info endpoints.
//!
//! Both are stateless apart from the configured environment name.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::config::Environment;
use crate::domain::foundation::Timestamp;

/// Service name reported by the info endpoint.
pub const SERVICE_NAME: &str = "Planning Poker API";

/// State for the info endpoint.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub environment: Environment,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub message: String,
    pub version: String,
    pub environment: String,
}

/// Report process liveness.
///
/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Timestamp::now().to_rfc3339(),
    })
}

/// Report service metadata.
///
/// GET /
pub async fn info(State(info): State<ServiceInfo>) -> Json<InfoResponse> {
    Json(InfoResponse {
        message: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: info.environment.to_string(),
    })
}

/// Create the health/info router.
///
/// # Routes
///
/// - `GET /` - service metadata
/// - `GET /health` - liveness
pub fn health_router() -> Router<ServiceInfo> {
    Router::new()
        .route("/", get(info))
        .route("/health", get(health))
}
