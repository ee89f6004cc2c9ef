//! Phase enum tracking where the table is in a voting round.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse state of the planning poker session.
///
/// `Finished` is part of the wire vocabulary but no operation produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Lobby,
    Voting,
    Revealing,
    Finished,
}

impl Phase {
    /// Returns true if votes are shown to everyone.
    pub fn is_revealing(&self) -> bool {
        matches!(self, Phase::Revealing)
    }

    /// Validates a transition from this phase to another.
    ///
    /// Valid transitions:
    /// - any -> Revealing (reveal)
    /// - any -> Voting (reset)
    pub fn can_transition_to(&self, target: &Phase) -> bool {
        matches!(target, Phase::Revealing | Phase::Voting)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Lobby => "lobby",
            Phase::Voting => "voting",
            Phase::Revealing => "revealing",
            Phase::Finished => "finished",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Phase; 4] = [Phase::Lobby, Phase::Voting, Phase::Revealing, Phase::Finished];

    #[test]
    fn default_is_lobby() {
        assert_eq!(Phase::default(), Phase::Lobby);
    }

    #[test]
    fn only_revealing_shows_votes() {
        assert!(Phase::Revealing.is_revealing());
        assert!(!Phase::Lobby.is_revealing());
        assert!(!Phase::Voting.is_revealing());
        assert!(!Phase::Finished.is_revealing());
    }

    #[test]
    fn every_phase_can_reveal_and_reset() {
        for phase in ALL {
            assert!(phase.can_transition_to(&Phase::Revealing));
            assert!(phase.can_transition_to(&Phase::Voting));
        }
    }

    #[test]
    fn nothing_transitions_to_lobby_or_finished() {
        for phase in ALL {
            assert!(!phase.can_transition_to(&Phase::Lobby));
            assert!(!phase.can_transition_to(&Phase::Finished));
        }
    }

    #[test]
    fn serializes_to_lowercase_json() {
        assert_eq!(serde_json::to_string(&Phase::Lobby).unwrap(), "\"lobby\"");
        assert_eq!(serde_json::to_string(&Phase::Revealing).unwrap(), "\"revealing\"");
        assert_eq!(serde_json::to_string(&Phase::Finished).unwrap(), "\"finished\"");
    }

    #[test]
    fn display_matches_wire_name() {
        for phase in ALL {
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, format!("\"{}\"", phase));
        }
    }
}
