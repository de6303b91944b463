//! Crate-wide error type.
//!
//! Engine operations either succeed completely or fail with one of these
//! variants before any state is touched.

use thiserror::Error;

use crate::core::Location;

#[derive(Error, Debug)]
pub enum MatchError {
    /// A precondition on card or game state was violated.
    ///
    /// Usually a collaborator bug (e.g. matching a card twice).
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    /// The location does not hold an unmatched card.
    #[error("no unmatched card at {location}")]
    NotFound { location: Location },

    /// A persisted record is malformed or breaks a game invariant.
    #[error("cannot decode field `{field}`: {reason}")]
    Decode { field: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatchError {
    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    pub(crate) fn decode(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error came from reading or decoding a save.
    ///
    /// Presentation layers treat these as "no saved game".
    #[must_use]
    pub fn is_unreadable_save(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
