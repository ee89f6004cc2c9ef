//! WebSocket adapters for the real-time planning poker channel.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  text frame   ┌──────────────┐  SessionCommand  ┌────────────────────┐
//! │   socket a   │──────────────▶│   handler    │─────────────────▶│ SessionCoordinator │
//! └──────────────┘               └──────────────┘                  └────────────────────┘
//!        ▲                                                                  │
//!        │ ServerMessage::State (projected for a)                           │ broadcast_state
//!        │                                                                  ▼
//!        └─────────────────────────────────────────────────────┌────────────────────┐
//!                                                               │ ConnectionRegistry │
//!                                                               └────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`messages`] - WebSocket message protocol types
//! - [`connections`] - Per-connection outbound queues and fan-out
//! - [`handler`] - Axum WebSocket upgrade handler

pub mod connections;
pub mod handler;
pub mod messages;

pub use connections::ConnectionRegistry;
pub use handler::{websocket_router, ws_handler, WebSocketState};
pub use messages::{dispatch, ClientMessage, Dispatch, ErrorMessage, PongMessage, ServerMessage};
