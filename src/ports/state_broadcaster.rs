//! StateBroadcaster port - Interface for pushing session state to clients.
//!
//! The coordinator calls this after every mutation without knowing how
//! clients are connected. Each recipient gets its own projection of the
//! session, so implementations project per connection rather than sending
//! one shared payload.

use crate::domain::foundation::ConnectionId;
use crate::domain::poker::Session;

/// Port for fanning session state out to connected clients.
///
/// Implementations must ensure:
/// - Delivery is fire-and-forget: no acknowledgement, no retry
/// - Messages to one recipient keep the order of the calls
/// - Calls never block on a slow recipient
pub trait StateBroadcaster: Send + Sync {
    /// Send the session, projected for `connection_id`, to that connection only.
    fn send_state(&self, connection_id: &ConnectionId, session: &Session);

    /// Send the session to every connected client, joined or not, each
    /// receiving its own projection.
    fn broadcast_state(&self, session: &Session);
}
