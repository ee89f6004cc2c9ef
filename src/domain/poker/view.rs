//! Per-observer projection of the session.
//!
//! Before the reveal, an observer sees their own card but only a
//! "has voted" marker for everybody else. During the reveal all cards are
//! shown as they are.

use serde::{Serialize, Serializer};

use crate::domain::foundation::ConnectionId;

use super::{Phase, Player, Session};

/// Wire value standing in for a card that is hidden from the observer.
///
/// Cards are always strings on the wire, so a number can never collide
/// with a real card.
pub const HIDDEN_VOTE_SENTINEL: i64 = -1;

/// What an observer is allowed to know about one player's vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteView {
    /// No card picked (serialized as `null`).
    NotVoted,
    /// A card was picked but is not visible to this observer.
    Hidden,
    /// The card itself.
    Card(String),
}

impl VoteView {
    /// Redact `player`'s vote for `viewer` according to `phase`.
    pub fn for_viewer(phase: Phase, player: &Player, viewer: &ConnectionId) -> Self {
        match player.vote() {
            None => VoteView::NotVoted,
            Some(card) if phase.is_revealing() || player.id() == viewer => {
                VoteView::Card(card.to_string())
            }
            Some(_) => VoteView::Hidden,
        }
    }
}

impl Serialize for VoteView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            VoteView::NotVoted => serializer.serialize_none(),
            VoteView::Hidden => serializer.serialize_i64(HIDDEN_VOTE_SENTINEL),
            VoteView::Card(card) => serializer.serialize_str(card),
        }
    }
}

/// One player as seen by an observer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub id: ConnectionId,
    pub name: String,
    pub vote: VoteView,
}

/// The session as seen by one observer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub id: String,
    pub name: String,
    /// Current phase, named `state` on the wire.
    #[serde(rename = "state")]
    pub phase: Phase,
    pub players: Vec<PlayerView>,
}

impl SessionView {
    /// Find a player in the view by connection.
    pub fn player(&self, id: &ConnectionId) -> Option<&PlayerView> {
        self.players.iter().find(|p| &p.id == id)
    }
}

/// Project the session for `viewer`.
///
/// The viewer does not need to be a player: spectators see every vote
/// redacted until the reveal.
pub fn project(session: &Session, viewer: &ConnectionId) -> SessionView {
    let phase = session.phase();
    SessionView {
        id: session.id().to_string(),
        name: session.name().to_string(),
        phase,
        players: session
            .players()
            .iter()
            .map(|p| PlayerView {
                id: *p.id(),
                name: p.name().to_string(),
                vote: VoteView::for_viewer(phase, p, viewer),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    struct Table {
        session: Session,
        alice: ConnectionId,
        bob: ConnectionId,
    }

    fn alice_voted_five() -> Table {
        let mut session = Session::default();
        let alice = ConnectionId::new();
        let bob = ConnectionId::new();
        session.join(alice, "Alice");
        session.join(bob, "Bob");
        session.vote(&alice, "5");
        Table { session, alice, bob }
    }

    #[test]
    fn others_see_hidden_marker_before_reveal() {
        let t = alice_voted_five();

        let bobs_view = project(&t.session, &t.bob);

        assert_eq!(bobs_view.player(&t.alice).unwrap().vote, VoteView::Hidden);
        assert_eq!(bobs_view.player(&t.bob).unwrap().vote, VoteView::NotVoted);
    }

    #[test]
    fn owner_sees_own_card_before_reveal() {
        let t = alice_voted_five();

        let alices_view = project(&t.session, &t.alice);

        assert_eq!(
            alices_view.player(&t.alice).unwrap().vote,
            VoteView::Card("5".to_string())
        );
    }

    #[test]
    fn everybody_sees_cards_after_reveal() {
        let mut t = alice_voted_five();
        t.session.reveal();

        for viewer in [t.alice, t.bob, ConnectionId::new()] {
            let view = project(&t.session, &viewer);
            assert_eq!(
                view.player(&t.alice).unwrap().vote,
                VoteView::Card("5".to_string())
            );
            assert_eq!(view.player(&t.bob).unwrap().vote, VoteView::NotVoted);
        }
    }

    #[test]
    fn spectator_sees_every_vote_hidden() {
        let t = alice_voted_five();
        let view = project(&t.session, &ConnectionId::new());
        assert_eq!(view.player(&t.alice).unwrap().vote, VoteView::Hidden);
    }

    #[test]
    fn finished_phase_redacts_like_voting() {
        let t = alice_voted_five();
        let player = t.session.player(&t.alice).unwrap();
        assert_eq!(
            VoteView::for_viewer(Phase::Finished, player, &t.bob),
            VoteView::Hidden
        );
    }

    #[test]
    fn view_passes_session_fields_through() {
        let t = alice_voted_five();
        let view = project(&t.session, &t.bob);

        assert_eq!(view.id, "planning-poker");
        assert_eq!(view.name, "Planning Poker");
        assert_eq!(view.phase, Phase::Lobby);
        let names: Vec<&str> = view.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn view_serializes_to_wire_shape() {
        let t = alice_voted_five();
        let value = serde_json::to_value(project(&t.session, &t.bob)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "planning-poker",
                "name": "Planning Poker",
                "state": "lobby",
                "players": [
                    { "id": t.alice.to_string(), "name": "Alice", "vote": -1 },
                    { "id": t.bob.to_string(), "name": "Bob", "vote": null },
                ]
            })
        );
    }

    #[test]
    fn revealed_card_serializes_as_string() {
        let mut t = alice_voted_five();
        t.session.reveal();
        let value = serde_json::to_value(project(&t.session, &t.bob)).unwrap();
        assert_eq!(value["state"], "revealing");
        assert_eq!(value["players"][0]["vote"], "5");
    }

    proptest! {
        #[test]
        fn foreign_cards_never_leak_before_reveal(
            cards in proptest::collection::vec(proptest::option::of("[0-9?]{1,3}"), 1..8),
            reset_first in any::<bool>(),
        ) {
            let mut session = Session::default();
            if reset_first {
                session.reset();
            }
            let ids: Vec<ConnectionId> = cards.iter().map(|_| ConnectionId::new()).collect();
            for (i, id) in ids.iter().enumerate() {
                session.join(*id, format!("p{}", i));
            }
            for (id, card) in ids.iter().zip(cards.iter()) {
                if let Some(card) = card {
                    session.vote(id, card.clone());
                }
            }

            for viewer in &ids {
                let view = project(&session, viewer);
                for (player, card) in view.players.iter().zip(cards.iter()) {
                    let expected = match card {
                        None => VoteView::NotVoted,
                        Some(c) if &player.id == viewer => VoteView::Card(c.clone()),
                        Some(_) => VoteView::Hidden,
                    };
                    prop_assert_eq!(&player.vote, &expected);
                }
            }
        }
    }
}
