//! Commands accepted by the session coordinator.

use crate::domain::foundation::ConnectionId;

/// One inbound event from a client connection.
///
/// Names and cards are expected to be validated already; the coordinator
/// applies them as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// A connection was accepted; it gets the current state once.
    Connect { connection_id: ConnectionId },
    /// Seat a player for this connection.
    Join {
        connection_id: ConnectionId,
        name: String,
    },
    /// Record this connection's card.
    Vote {
        connection_id: ConnectionId,
        card: String,
    },
    /// Show all cards.
    Reveal { connection_id: ConnectionId },
    /// Clear all cards and start voting.
    Reset { connection_id: ConnectionId },
    /// The connection went away.
    Leave { connection_id: ConnectionId },
}

impl SessionCommand {
    /// The connection that issued this command.
    pub fn connection_id(&self) -> &ConnectionId {
        match self {
            SessionCommand::Connect { connection_id }
            | SessionCommand::Join { connection_id, .. }
            | SessionCommand::Vote { connection_id, .. }
            | SessionCommand::Reveal { connection_id }
            | SessionCommand::Reset { connection_id }
            | SessionCommand::Leave { connection_id } => connection_id,
        }
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionCommand::Connect { .. } => "connect",
            SessionCommand::Join { .. } => "join",
            SessionCommand::Vote { .. } => "vote",
            SessionCommand::Reveal { .. } => "reveal",
            SessionCommand::Reset { .. } => "reset",
            SessionCommand::Leave { .. } => "leave",
        }
    }
}
