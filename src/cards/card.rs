//! Cards - an identity plus mutable board state.
//!
//! A `Card` is dealt unplaced (location 0) and unmatched. The board arranger
//! gives it a location, and once its pair is found it is matched for good.
//!
//! ## Guessing
//!
//! `being_guessed` is a display flag only. It never affects matching.

use serde::{Deserialize, Serialize};

use super::identity::Identity;
use crate::core::Location;
use crate::error::{MatchError, Result};

/// A card in a matching game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    identity: Identity,
    location: Location,
    matched: bool,
    #[serde(skip)]
    being_guessed: bool,
}

impl Card {
    /// Create an unplaced, unmatched card.
    #[must_use]
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            location: Location::UNPLACED,
            matched: false,
            being_guessed: false,
        }
    }

    /// Rebuild a card from saved fields. The guess flag always starts cleared.
    #[must_use]
    pub fn restore(identity: Identity, location: Location, matched: bool) -> Self {
        Self {
            identity,
            location,
            matched,
            being_guessed: false,
        }
    }

    #[must_use]
    pub fn identity(&self) -> Identity {
        self.identity
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    #[must_use]
    pub fn is_being_guessed(&self) -> bool {
        self.being_guessed
    }

    /// Check if two cards form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.identity == other.identity
    }

    /// Move the card to `location`.
    ///
    /// Uniqueness across the board is the game's job, not the card's.
    pub fn set_location(&mut self, location: Location) -> Result<()> {
        if !location.is_placed() {
            return Err(MatchError::invalid_state(format!(
                "card {} cannot be moved to {}",
                self.identity, location
            )));
        }
        self.location = location;
        Ok(())
    }

    /// Place the card during board arrangement. `location` is always > 0 there.
    pub(crate) fn place(&mut self, location: Location) {
        debug_assert!(location.is_placed(), "arranger produced an unplaced slot");
        self.location = location;
    }

    pub fn mark_guessed(&mut self) {
        self.being_guessed = true;
    }

    pub fn unmark_guessed(&mut self) {
        self.being_guessed = false;
    }

    /// Permanently mark the card as matched. Also clears the guess flag.
    pub fn mark_matched(&mut self) -> Result<()> {
        if self.matched {
            return Err(MatchError::invalid_state(format!(
                "card {} at {} is already matched",
                self.identity, self.location
            )));
        }
        self.matched = true;
        self.being_guessed = false;
        Ok(())
    }
}
