//! Planning poker domain module.
//!
//! - [`Session`] - the single table: players, phase and the five mutations
//! - [`view`] - per-observer redaction of votes
//!
//! # Phases
//!
//! ```text
//! lobby ──reveal──▶ revealing ──reset──▶ voting ──reveal──▶ revealing
//!   └──────reset─────────────────────────▲
//! ```
//!
//! `finished` exists in the vocabulary but nothing produces it.

mod phase;
mod player;
mod session;
pub mod view;

pub use phase::Phase;
pub use player::{Player, MAX_CARD_LENGTH, MAX_NAME_LENGTH};
pub use session::{Session, SESSION_ID, SESSION_NAME};
pub use view::{project, PlayerView, SessionView, VoteView, HIDDEN_VOTE_SENTINEL};
