//! Guess turns: pick two cards, wait, resolve.
//!
//! `PlaySession` tracks the picks of the current turn so a presentation
//! layer does not have to. It accepts at most two picks and ignores a repeat
//! of the first pick, or any pick made while a pair waits to be resolved.
//! Once a pair is ready it hands back the reveal delay; the caller waits that
//! long (or not) and then calls `resolve`.
//!
//! ```
//! use memory_match::game::{MatchingGame, Pick, PlaySession};
//! use memory_match::core::Location;
//! use std::time::Duration;
//!
//! let mut session = PlaySession::new(MatchingGame::with_seed(3), Duration::from_millis(0));
//!
//! assert_eq!(session.pick(Location(1)).unwrap(), Pick::First(Location(1)));
//! assert_eq!(session.pick(Location(1)).unwrap(), Pick::Ignored);
//! assert!(matches!(session.pick(Location(2)).unwrap(), Pick::ReadyToResolve { .. }));
//!
//! session.resolve().unwrap();
//! assert_eq!(session.game().guess_count(), 1);
//! ```

use std::time::Duration;

use smallvec::SmallVec;
use tracing::debug;

use super::engine::{GamePhase, GuessOutcome, MatchingGame};
use crate::cards::Identity;
use crate::core::{GameConfig, Location};
use crate::error::{MatchError, Result};

/// What a pick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    /// First card of the turn revealed.
    First(Location),
    /// Second card revealed. Resolve after `delay`.
    ReadyToResolve { delay: Duration },
    /// Repeat of the first pick, or a pick while two cards are showing.
    /// Nothing changed.
    Ignored,
}

/// A game plus the picks of the turn in progress.
#[derive(Clone, Debug)]
pub struct PlaySession {
    game: MatchingGame,
    pending: SmallVec<[Location; 2]>,
    reveal_delay: Duration,
}

impl PlaySession {
    #[must_use]
    pub fn new(game: MatchingGame, reveal_delay: Duration) -> Self {
        Self {
            game,
            pending: SmallVec::new(),
            reveal_delay,
        }
    }

    /// Start a fresh game from `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Ok(Self::new(MatchingGame::with_config(config)?, config.reveal_delay()))
    }

    #[must_use]
    pub fn game(&self) -> &MatchingGame {
        &self.game
    }

    /// End the session, keeping the game (e.g. to save it).
    ///
    /// Pending picks are dropped and their guess flags cleared.
    #[must_use]
    pub fn into_game(mut self) -> MatchingGame {
        self.cancel();
        self.game
    }

    /// Locations picked this turn, in pick order.
    #[must_use]
    pub fn pending(&self) -> &[Location] {
        &self.pending
    }

    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    /// Reveal the card at `location` as part of the current turn.
    pub fn pick(&mut self, location: Location) -> Result<Pick> {
        match self.pending.as_slice() {
            [first] if *first == location => return Ok(Pick::Ignored),
            [_, _] => {
                debug!(%location, "pick ignored while a pair is showing");
                return Ok(Pick::Ignored);
            }
            _ => {}
        }

        if !self.game.guess_card(location) {
            return Err(MatchError::NotFound { location });
        }
        self.pending.push(location);
        debug!(%location, picks = self.pending.len(), "card picked");

        Ok(match self.pending.len() {
            1 => Pick::First(location),
            _ => Pick::ReadyToResolve {
                delay: self.reveal_delay,
            },
        })
    }

    /// Resolve the two pending picks.
    pub fn resolve(&mut self) -> Result<GuessOutcome> {
        let [first, second] = self.pending.as_slice() else {
            return Err(MatchError::invalid_state(format!(
                "need two picks to resolve, have {}",
                self.pending.len()
            )));
        };
        let outcome = self.game.resolve_pair(*first, *second)?;
        self.pending.clear();
        Ok(outcome)
    }

    /// Drop the pending picks and hide their cards again.
    pub fn cancel(&mut self) {
        for location in std::mem::take(&mut self.pending) {
            self.game.unguess_card(location);
        }
    }

    /// Grow the board before play begins.
    ///
    /// Refused once a guess has been made or while cards are picked, since
    /// adding a pair rearranges the whole board.
    pub fn add_card_pair(&mut self) -> Result<Option<Identity>> {
        if self.game.phase() != GamePhase::NotStarted || !self.pending.is_empty() {
            return Err(MatchError::invalid_state(
                "pairs can only be added before the first guess",
            ));
        }
        Ok(self.game.add_card_pair())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game.check_game_over()
    }
}
