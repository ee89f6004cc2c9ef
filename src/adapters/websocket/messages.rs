//! WebSocket message types for the planning poker table.
//!
//! Defines the protocol between server and connected clients:
//! - Server → Client: session state, errors, pongs
//! - Client → Server: join, vote, reveal, reset, ping

use serde::{Deserialize, Serialize};

use crate::application::SessionCommand;
use crate::domain::foundation::{ConnectionId, ErrorCode, Timestamp, ValidationError};
use crate::domain::poker::{Player, SessionView};

// ============================================
// Server → Client Messages
// ============================================

/// All message types that can be sent from server to client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Session as seen by the recipient.
    State(SessionView),

    /// The last client message was rejected.
    Error(ErrorMessage),

    /// Heartbeat response.
    Pong(PongMessage),
}

/// Error message sent to client.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub code: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorMessage {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            timestamp: Timestamp::now().to_rfc3339(),
        }
    }
}

/// Heartbeat response.
#[derive(Debug, Clone, Serialize)]
pub struct PongMessage {
    pub timestamp: String,
}

// ============================================
// Client → Server Messages
// ============================================

/// All message types that can be received from client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Take a seat at the table.
    Join { name: String },

    /// Pick a card.
    Vote { card: String },

    /// Show everyone's cards.
    Reveal,

    /// Clear cards and start a new round.
    Reset,

    /// Heartbeat request.
    Ping,
}

/// What to do with one inbound text frame.
#[derive(Debug, Clone)]
pub enum Dispatch {
    /// Forward to the session coordinator.
    Command(SessionCommand),

    /// Answer the sender directly without touching the session.
    Reply(ServerMessage),
}

impl ClientMessage {
    /// Validate the payload and turn it into a coordinator command.
    ///
    /// Returns `Ok(None)` for messages the coordinator does not handle.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorMessage`] when the name or card is rejected.
    pub fn into_command(
        self,
        connection_id: ConnectionId,
    ) -> Result<Option<SessionCommand>, ErrorMessage> {
        let command = match self {
            ClientMessage::Join { name } => SessionCommand::Join {
                connection_id,
                name: Player::validate_name(&name).map_err(|e| rejected(ErrorCode::InvalidName, e))?,
            },
            ClientMessage::Vote { card } => SessionCommand::Vote {
                connection_id,
                card: Player::validate_card(&card).map_err(|e| rejected(ErrorCode::InvalidCard, e))?,
            },
            ClientMessage::Reveal => SessionCommand::Reveal { connection_id },
            ClientMessage::Reset => SessionCommand::Reset { connection_id },
            ClientMessage::Ping => return Ok(None),
        };
        Ok(Some(command))
    }
}

fn rejected(code: ErrorCode, error: ValidationError) -> ErrorMessage {
    ErrorMessage::new(code, error.to_string())
}

/// Decode and validate one text frame from `connection_id`.
pub fn dispatch(text: &str, connection_id: ConnectionId) -> Dispatch {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            return Dispatch::Reply(ServerMessage::Error(ErrorMessage::new(
                ErrorCode::InvalidMessage,
                e.to_string(),
            )))
        }
    };

    match message.into_command(connection_id) {
        Ok(Some(command)) => Dispatch::Command(command),
        Ok(None) => Dispatch::Reply(ServerMessage::Pong(PongMessage {
            timestamp: Timestamp::now().to_rfc3339(),
        })),
        Err(error) => Dispatch::Reply(ServerMessage::Error(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::poker::{project, Session};

    #[test]
    fn state_message_flattens_view_next_to_type_tag() {
        let mut session = Session::default();
        let id = ConnectionId::new();
        session.join(id, "Alice");
        let msg = ServerMessage::State(project(&session, &id));

        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["type"], "state");
        assert_eq!(value["id"], "planning-poker");
        assert_eq!(value["state"], "lobby");
        assert_eq!(value["players"][0]["name"], "Alice");
        assert!(value["players"][0]["vote"].is_null());
    }

    #[test]
    fn error_message_serializes_correctly() {
        let msg = ServerMessage::Error(ErrorMessage::new(ErrorCode::InvalidName, "too long"));

        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""type":"error""#));
        assert!(json.contains(r#""code":"INVALID_NAME""#));
    }

    #[test]
    fn client_message_deserializes_each_kind() {
        let cases = [
            (r#"{"type": "join", "name": "Alice"}"#, ClientMessage::Join { name: "Alice".to_string() }),
            (r#"{"type": "vote", "card": "13"}"#, ClientMessage::Vote { card: "13".to_string() }),
            (r#"{"type": "reveal"}"#, ClientMessage::Reveal),
            (r#"{"type": "reset"}"#, ClientMessage::Reset),
            (r#"{"type": "ping"}"#, ClientMessage::Ping),
        ];
        for (json, expected) in cases {
            let msg: ClientMessage = serde_json::from_str(json).unwrap();
            assert_eq!(msg, expected);
        }
    }

    #[test]
    fn client_message_rejects_non_string_card() {
        let result = serde_json::from_str::<ClientMessage>(r#"{"type": "vote", "card": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn dispatch_turns_join_into_trimmed_command() {
        let id = ConnectionId::new();
        match dispatch(r#"{"type":"join","name":"  Alice "}"#, id) {
            Dispatch::Command(SessionCommand::Join { connection_id, name }) => {
                assert_eq!(connection_id, id);
                assert_eq!(name, "Alice");
            }
            other => panic!("unexpected dispatch: {:?}", other),
        }
    }

    #[test]
    fn dispatch_answers_ping_with_pong() {
        let reply = dispatch(r#"{"type":"ping"}"#, ConnectionId::new());
        assert!(matches!(reply, Dispatch::Reply(ServerMessage::Pong(_))));
    }

    #[test]
    fn dispatch_rejects_unknown_type() {
        match dispatch(r#"{"type":"finish"}"#, ConnectionId::new()) {
            Dispatch::Reply(ServerMessage::Error(e)) => assert_eq!(e.code, "INVALID_MESSAGE"),
            other => panic!("unexpected dispatch: {:?}", other),
        }
    }

    #[test]
    fn dispatch_rejects_malformed_json() {
        match dispatch("not json", ConnectionId::new()) {
            Dispatch::Reply(ServerMessage::Error(e)) => assert_eq!(e.code, "INVALID_MESSAGE"),
            other => panic!("unexpected dispatch: {:?}", other),
        }
    }

    #[test]
    fn dispatch_rejects_blank_name_and_card() {
        match dispatch(r#"{"type":"join","name":"   "}"#, ConnectionId::new()) {
            Dispatch::Reply(ServerMessage::Error(e)) => assert_eq!(e.code, "INVALID_NAME"),
            other => panic!("unexpected dispatch: {:?}", other),
        }
        match dispatch(r#"{"type":"vote","card":""}"#, ConnectionId::new()) {
            Dispatch::Reply(ServerMessage::Error(e)) => assert_eq!(e.code, "INVALID_CARD"),
            other => panic!("unexpected dispatch: {:?}", other),
        }
    }
}
