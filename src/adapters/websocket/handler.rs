//! WebSocket upgrade handler for planning poker clients.
//!
//! Handles the HTTP → WebSocket upgrade and manages the connection lifecycle:
//! 1. Check the origin against the configured policy
//! 2. Upgrade to WebSocket and register the connection
//! 3. Send the current state
//! 4. Forward client messages to the coordinator until disconnect
//! 5. Unregister and remove the player

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use futures::{SinkExt, StreamExt};

use crate::adapters::http::OriginPolicy;
use crate::application::{SessionCommand, SessionHandle};

use super::{
    connections::ConnectionRegistry,
    messages::{dispatch, Dispatch, ServerMessage},
};

/// State required for WebSocket handling.
#[derive(Clone)]
pub struct WebSocketState {
    /// Live connections and their outbound queues.
    pub connections: Arc<ConnectionRegistry>,
    /// Queue into the session coordinator.
    pub session: SessionHandle,
    /// Which browser origins may open a socket.
    pub origin_policy: OriginPolicy,
}

impl WebSocketState {
    /// Create a new WebSocket state.
    pub fn new(
        connections: Arc<ConnectionRegistry>,
        session: SessionHandle,
        origin_policy: OriginPolicy,
    ) -> Self {
        Self {
            connections,
            session,
            origin_policy,
        }
    }
}

/// Handle WebSocket upgrade requests.
///
/// Route: `GET /ws`
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    headers: HeaderMap,
    State(state): State<WebSocketState>,
) -> Response {
    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok());

    if !state.origin_policy.allows(origin) {
        tracing::warn!(origin = ?origin, "Rejected WebSocket upgrade from disallowed origin");
        return StatusCode::FORBIDDEN.into_response();
    }

    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an established WebSocket connection.
///
/// Runs for the lifetime of the connection.
async fn handle_socket(socket: WebSocket, state: WebSocketState) {
    let (mut sender, mut receiver) = socket.split();

    let (connection_id, mut outbox) = state.connections.register();
    tracing::info!(%connection_id, "Client connected");

    if state
        .session
        .send(SessionCommand::Connect { connection_id })
        .await
        .is_err()
    {
        tracing::error!(%connection_id, "Session coordinator unavailable, closing connection");
        state.connections.unregister(&connection_id);
        return;
    }

    // Forward queued messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = outbox.recv().await {
            if let Err(e) = send_message(&mut sender, &msg).await {
                tracing::debug!(%connection_id, "Send error, closing connection: {}", e);
                break;
            }
        }
    });

    // Handle incoming messages from client
    let connections = state.connections.clone();
    let session = state.session.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Text(text)) => match dispatch(&text, connection_id) {
                    Dispatch::Command(command) => {
                        if session.send(command).await.is_err() {
                            tracing::error!(%connection_id, "Session coordinator stopped");
                            break;
                        }
                    }
                    Dispatch::Reply(reply) => {
                        if let ServerMessage::Error(error) = &reply {
                            tracing::warn!(
                                %connection_id,
                                code = %error.code,
                                "Rejected client message: {}",
                                error.message
                            );
                        }
                        connections.send_to(&connection_id, reply);
                    }
                },
                Ok(Message::Binary(_)) => {
                    tracing::warn!(%connection_id, "Received unsupported binary message");
                }
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {
                    // WebSocket protocol ping/pong - handled automatically by axum
                }
                Ok(Message::Close(_)) => {
                    tracing::debug!(%connection_id, "Client sent close frame");
                    break;
                }
                Err(e) => {
                    tracing::debug!(%connection_id, "Receive error: {}", e);
                    break;
                }
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    // Cleanup: stop fan-out to this socket, then drop the player
    state.connections.unregister(&connection_id);
    if state
        .session
        .send(SessionCommand::Leave { connection_id })
        .await
        .is_err()
    {
        tracing::debug!(%connection_id, "Session coordinator stopped before leave");
    }
    tracing::info!(%connection_id, "Client disconnected");
}

/// Send a JSON message over the WebSocket.
async fn send_message(
    sender: &mut futures::stream::SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    sender.send(Message::Text(json)).await
}

/// Create axum router for the WebSocket endpoint.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .merge(websocket_router().with_state(ws_state));
/// ```
pub fn websocket_router() -> axum::Router<WebSocketState> {
    use axum::routing::get;

    axum::Router::new().route("/ws", get(ws_handler))
}
