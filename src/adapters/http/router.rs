//! Top-level axum router.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::adapters::websocket::{websocket_router, WebSocketState};

use super::health::{health_router, ServiceInfo};

/// Assemble every route with CORS and request tracing.
///
/// # Routes
///
/// - `GET /` - service metadata
/// - `GET /health` - liveness
/// - `GET /ws` - WebSocket upgrade
pub fn app_router(info: ServiceInfo, ws_state: WebSocketState) -> Router {
    let cors = ws_state.origin_policy.cors_layer();

    Router::new()
        .merge(health_router().with_state(info))
        .merge(websocket_router().with_state(ws_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
