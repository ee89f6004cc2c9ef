//! HTTP adapters - REST endpoints, CORS and the top-level router.

pub mod cors;
pub mod health;
pub mod router;

pub use cors::OriginPolicy;
pub use health::{health_router, HealthResponse, InfoResponse, ServiceInfo};
pub use router::app_router;
