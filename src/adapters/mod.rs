//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Health/info endpoints, CORS and the application router
//! - `websocket` - Real-time channel; `ConnectionRegistry` implements `StateBroadcaster`

pub mod http;
pub mod websocket;

pub use http::{app_router, OriginPolicy, ServiceInfo};
pub use websocket::{ConnectionRegistry, WebSocketState};
