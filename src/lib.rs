//! Planning Poker - Real-time estimation server
//!
//! One shared table where connected clients join, pick hidden cards and
//! reveal them together. Votes stay hidden from other players until the
//! reveal; each client receives its own redacted view after every change.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
