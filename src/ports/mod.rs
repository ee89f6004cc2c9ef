//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `StateBroadcaster` - Pushes projected session state to connected clients

mod state_broadcaster;

pub use state_broadcaster::StateBroadcaster;
