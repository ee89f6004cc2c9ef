//! SessionCoordinator - the single writer of the planning poker session.
//!
//! Commands from every connection funnel through one queue into one task.
//! Each command is applied and its broadcast handed to the
//! [`StateBroadcaster`] before the next command is read, so the session is
//! never touched concurrently and every client sees states in the order
//! they were produced.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::poker::Session;
use crate::ports::StateBroadcaster;

use super::commands::SessionCommand;

/// Errors returned by [`SessionHandle`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatorError {
    #[error("Session coordinator has stopped")]
    Stopped,
}

/// Owns the session and applies commands to it.
pub struct SessionCoordinator {
    session: Session,
    broadcaster: Arc<dyn StateBroadcaster>,
}

impl SessionCoordinator {
    /// Create a coordinator around a fresh session.
    pub fn new(broadcaster: Arc<dyn StateBroadcaster>) -> Self {
        Self::with_session(Session::default(), broadcaster)
    }

    /// Create a coordinator around an existing session.
    pub fn with_session(session: Session, broadcaster: Arc<dyn StateBroadcaster>) -> Self {
        Self {
            session,
            broadcaster,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply one command and push the resulting state out.
    pub fn handle(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Connect { connection_id } => {
                tracing::debug!(%connection_id, "Sending initial state");
                self.broadcaster.send_state(&connection_id, &self.session);
                return;
            }
            SessionCommand::Join {
                connection_id,
                name,
            } => {
                if self.session.join(connection_id, name.clone()) {
                    tracing::info!(%connection_id, name = %name, "Player joined");
                } else {
                    tracing::debug!(%connection_id, "Connection already seated, join ignored");
                }
            }
            SessionCommand::Vote {
                connection_id,
                card,
            } => {
                if self.session.vote(&connection_id, card) {
                    tracing::debug!(
                        %connection_id,
                        votes_cast = self.session.votes_cast(),
                        "Vote recorded"
                    );
                } else {
                    tracing::debug!(%connection_id, "Vote from connection without a player ignored");
                }
            }
            SessionCommand::Reveal { connection_id } => {
                self.session.reveal();
                tracing::info!(
                    %connection_id,
                    votes_cast = self.session.votes_cast(),
                    players = self.session.player_count(),
                    "Votes revealed"
                );
            }
            SessionCommand::Reset { connection_id } => {
                self.session.reset();
                tracing::info!(%connection_id, "Round reset");
            }
            SessionCommand::Leave { connection_id } => {
                if let Some(player) = self.session.leave(&connection_id) {
                    tracing::info!(%connection_id, name = %player.name(), "Player left");
                }
            }
        }

        self.broadcaster.broadcast_state(&self.session);
    }

    /// Run the coordinator on its own task.
    ///
    /// The task ends once every [`SessionHandle`] is dropped and yields the
    /// final session.
    pub fn spawn(self, queue_capacity: usize) -> (SessionHandle, JoinHandle<Session>) {
        let (tx, rx) = mpsc::channel(queue_capacity);
        let task = tokio::spawn(self.run(rx));
        (SessionHandle { tx }, task)
    }

    async fn run(mut self, mut commands: mpsc::Receiver<SessionCommand>) -> Session {
        tracing::debug!("Session coordinator started");
        while let Some(command) = commands.recv().await {
            tracing::trace!(kind = command.kind(), "Applying command");
            self.handle(command);
        }
        tracing::debug!("Session coordinator stopped");
        self.session
    }
}

/// Cloneable sender side of a running [`SessionCoordinator`].
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<SessionCommand>,
}

impl SessionHandle {
    /// Queue a command for the coordinator.
    ///
    /// Waits only when the queue is full.
    pub async fn send(&self, command: SessionCommand) -> Result<(), CoordinatorError> {
        self.tx
            .send(command)
            .await
            .map_err(|_| CoordinatorError::Stopped)
    }
}
