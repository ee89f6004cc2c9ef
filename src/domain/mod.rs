//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `poker` - The planning poker session, its phases and vote redaction

pub mod foundation;
pub mod poker;
