//! Session aggregate - the one planning poker table.
//!
//! Holds the players seated at the table and the current phase. Every
//! operation is total: acting on a connection that has no player is a
//! silent no-op rather than an error.

use crate::domain::foundation::ConnectionId;

use super::{Phase, Player};

/// Fixed identifier of the session.
pub const SESSION_ID: &str = "planning-poker";

/// Fixed display name of the session.
pub const SESSION_NAME: &str = "Planning Poker";

/// Session aggregate.
///
/// # Invariants
///
/// - player ids are unique
/// - `players` keeps join order
/// - `phase` only changes through [`Session::reveal`] and [`Session::reset`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
    name: String,
    phase: Phase,
    players: Vec<Player>,
}

impl Session {
    /// Create an empty session in the lobby.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phase: Phase::Lobby,
            players: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Players in join order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up the player bound to a connection.
    pub fn player(&self, connection_id: &ConnectionId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == connection_id)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of players holding a card.
    pub fn votes_cast(&self) -> usize {
        self.players.iter().filter(|p| p.has_voted()).count()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Seat a new player for this connection.
    ///
    /// Returns false, leaving the table untouched, if the connection already
    /// has a player.
    pub fn join(&mut self, connection_id: ConnectionId, name: impl Into<String>) -> bool {
        if self.player(&connection_id).is_some() {
            return false;
        }
        self.players.push(Player::new(connection_id, name));
        true
    }

    /// Record a card for the player bound to this connection.
    ///
    /// Returns false if the connection has no player.
    pub fn vote(&mut self, connection_id: &ConnectionId, card: impl Into<String>) -> bool {
        match self.players.iter_mut().find(|p| p.id() == connection_id) {
            Some(player) => {
                player.cast(card.into());
                true
            }
            None => false,
        }
    }

    /// Show everyone's cards. Allowed from any phase.
    pub fn reveal(&mut self) {
        self.transition(Phase::Revealing);
    }

    /// Clear every vote and start a fresh round. Allowed from any phase.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.clear_vote();
        }
        self.transition(Phase::Voting);
    }

    /// Remove the player bound to this connection, returning it if present.
    pub fn leave(&mut self, connection_id: &ConnectionId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id() == connection_id)?;
        Some(self.players.remove(index))
    }

    fn transition(&mut self, target: Phase) {
        debug_assert!(self.phase.can_transition_to(&target));
        self.phase = target;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SESSION_ID, SESSION_NAME)
    }
}
