//! Player entity and the input rules for names and cards.

use crate::domain::foundation::{ConnectionId, ValidationError};

/// Maximum length for a display name, in characters.
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum length for a card value, in characters.
pub const MAX_CARD_LENGTH: usize = 16;

/// A participant bound to one live connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: ConnectionId,
    name: String,
    vote: Option<String>,
}

impl Player {
    /// Create a player who has not voted yet.
    pub fn new(id: ConnectionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            vote: None,
        }
    }

    pub fn id(&self) -> &ConnectionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The card this player picked, if any.
    pub fn vote(&self) -> Option<&str> {
        self.vote.as_deref()
    }

    pub fn has_voted(&self) -> bool {
        self.vote.is_some()
    }

    pub(super) fn cast(&mut self, card: String) {
        self.vote = Some(card);
    }

    pub(super) fn clear_vote(&mut self) {
        self.vote = None;
    }

    /// Trim and check a display name.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if nothing is left after trimming
    /// - `TooLong` if longer than [`MAX_NAME_LENGTH`] characters
    pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
        validate_text("name", raw, MAX_NAME_LENGTH)
    }

    /// Trim and check a card value.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if nothing is left after trimming
    /// - `TooLong` if longer than [`MAX_CARD_LENGTH`] characters
    pub fn validate_card(raw: &str) -> Result<String, ValidationError> {
        validate_text("card", raw, MAX_CARD_LENGTH)
    }
}

fn validate_text(field: &str, raw: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let len = trimmed.chars().count();
    if len > max {
        return Err(ValidationError::too_long(field, max, len));
    }
    Ok(trimmed.to_string())
}
