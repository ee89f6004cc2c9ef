//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod poker;

pub use poker::{CoordinatorError, SessionCommand, SessionCoordinator, SessionHandle};
