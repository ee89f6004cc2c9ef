//! Cross-origin policy shared by the HTTP routes and the WebSocket upgrade.

use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ServerConfig;

/// Which browser origins may talk to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginPolicy {
    /// Any origin (development and staging).
    Any,
    /// Only the listed origins (production).
    AllowList(Vec<String>),
}

impl OriginPolicy {
    /// Permissive outside production, allow-listed in production.
    pub fn from_config(server: &ServerConfig) -> Self {
        if server.is_production() {
            OriginPolicy::AllowList(server.cors_origins_list())
        } else {
            OriginPolicy::Any
        }
    }

    /// Check an `Origin` header value.
    ///
    /// Requests without an origin come from non-browser clients and are
    /// always allowed.
    pub fn allows(&self, origin: Option<&str>) -> bool {
        match (self, origin) {
            (OriginPolicy::Any, _) | (_, None) => true,
            (OriginPolicy::AllowList(origins), Some(origin)) => {
                origins.iter().any(|allowed| allowed == origin)
            }
        }
    }

    /// Build the CORS layer for the HTTP routes.
    pub fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods([Method::GET, Method::POST]);
        match self {
            OriginPolicy::Any => layer.allow_origin(Any),
            OriginPolicy::AllowList(origins) => {
                let values: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|origin| match HeaderValue::from_str(origin) {
                        Ok(value) => Some(value),
                        Err(_) => {
                            tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                            None
                        }
                    })
                    .collect();
                layer.allow_origin(AllowOrigin::list(values))
            }
        }
    }
}
