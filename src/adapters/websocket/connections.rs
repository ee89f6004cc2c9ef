//! Registry of live WebSocket connections.
//!
//! Every accepted socket gets a [`ConnectionId`] and a bounded outbound
//! queue. The registry owns the sending half of each queue; the socket's
//! writer task drains the receiving half. Dropping the sender on
//! [`ConnectionRegistry::unregister`] ends that writer task.
//!
//! ```text
//!                      ┌── conn-a queue ──▶ socket a
//! coordinator ──▶ registry ── conn-b queue ──▶ socket b
//!                      └── conn-c queue ──▶ socket c
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tokio::sync::mpsc::{self, error::TrySendError};

use crate::domain::foundation::ConnectionId;
use crate::domain::poker::{project, Session};
use crate::ports::StateBroadcaster;

use super::messages::ServerMessage;

/// Tracks connected clients and delivers messages to them.
///
/// # Thread Safety
///
/// Uses a `RwLock` for the connection map: fan-out after each mutation only
/// reads it, connects and disconnects write it. The lock is never held
/// across an await point.
pub struct ConnectionRegistry {
    /// Map of connection_id → outbound queue for that socket.
    connections: RwLock<HashMap<ConnectionId, mpsc::Sender<ServerMessage>>>,

    /// Buffer size for each connection's outbound queue.
    send_queue_capacity: usize,
}

impl ConnectionRegistry {
    /// Create a registry with the given per-connection queue size.
    ///
    /// A client that falls this many messages behind starts missing
    /// messages until it catches up.
    pub fn new(send_queue_capacity: usize) -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
            send_queue_capacity,
        }
    }

    /// Create with default capacity (128 messages).
    pub fn with_default_capacity() -> Self {
        Self::new(128)
    }

    /// Register a new connection.
    ///
    /// Returns its id and the receiver the socket writer should drain.
    pub fn register(&self) -> (ConnectionId, mpsc::Receiver<ServerMessage>) {
        let id = ConnectionId::new();
        let (tx, rx) = mpsc::channel(self.send_queue_capacity);
        self.connections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, tx);
        (id, rx)
    }

    /// Forget a connection. Returns false if it was not registered.
    pub fn unregister(&self, connection_id: &ConnectionId) -> bool {
        self.connections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(connection_id)
            .is_some()
    }

    /// Queue a message for one connection without waiting.
    ///
    /// Returns false if the connection is unknown, closed, or its queue is full.
    pub fn send_to(&self, connection_id: &ConnectionId, message: ServerMessage) -> bool {
        let connections = self
            .connections
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        match connections.get(connection_id) {
            Some(tx) => deliver(connection_id, tx, message),
            None => false,
        }
    }

    /// Number of registered connections.
    pub fn connection_count(&self) -> usize {
        self.connections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_connected(&self, connection_id: &ConnectionId) -> bool {
        self.connections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(connection_id)
    }
}

fn deliver(
    connection_id: &ConnectionId,
    tx: &mpsc::Sender<ServerMessage>,
    message: ServerMessage,
) -> bool {
    match tx.try_send(message) {
        Ok(()) => true,
        Err(TrySendError::Full(_)) => {
            tracing::warn!(
                connection_id = %connection_id,
                "Send queue full, dropping message"
            );
            false
        }
        Err(TrySendError::Closed(_)) => false,
    }
}

impl StateBroadcaster for ConnectionRegistry {
    fn send_state(&self, connection_id: &ConnectionId, session: &Session) {
        let view = project(session, connection_id);
        self.send_to(connection_id, ServerMessage::State(view));
    }

    fn broadcast_state(&self, session: &Session) {
        let connections = self
            .connections
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for (connection_id, tx) in connections.iter() {
            let view = project(session, connection_id);
            deliver(connection_id, tx, ServerMessage::State(view));
        }
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
