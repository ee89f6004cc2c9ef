//! Planning poker handlers.
//!
//! - [`SessionCommand`] - what a connection asked for
//! - [`SessionCoordinator`] - applies commands one at a time and broadcasts
//! - [`SessionHandle`] - queue into a running coordinator

mod commands;
mod coordinator;

pub use commands::SessionCommand;
pub use coordinator::{CoordinatorError, SessionCoordinator, SessionHandle};
