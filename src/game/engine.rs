//! The matching game engine.
//!
//! `MatchingGame` owns every card collection and counter. Collaborators
//! mutate it only through named operations and read it through shared
//! borrows or a `BoardSnapshot`.
//!
//! ## Invariants
//!
//! After every public operation:
//! - unmatched + matched cards add up to `card_count`
//! - each identity in use is on exactly two cards
//! - `unmatched_locations` holds exactly the unmatched cards' locations
//! - `match_count <= card_count / 2`, and the game is over at equality
//! - matched cards are flagged matched, unmatched cards are not
//!
//! Fallible operations validate first, so an `Err` leaves the game untouched.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::BoardArranger;
use crate::cards::{Card, Identity, IdentityPool};
use crate::core::{GameConfig, GameRng, Location, MIN_PAIRS};
use crate::error::{MatchError, Result};

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No guess counted and no card matched yet.
    NotStarted,
    /// At least one guess made, pairs remain.
    InProgress,
    /// Every pair has been found.
    Over,
}

/// Result of resolving a guessed pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    /// Both cards share this identity and were removed from the board.
    Match(Identity),
    /// Identities differ; both cards stay on the board, unflagged.
    Miss,
}

impl GuessOutcome {
    #[must_use]
    pub fn is_match(self) -> bool {
        matches!(self, GuessOutcome::Match(_))
    }
}

/// Read-only view of a game for rendering.
///
/// Cloning is O(1): the card lists are persistent vectors shared with the
/// engine until either side changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub card_count: usize,
    pub unmatched_cards: Vector<Card>,
    pub unmatched_locations: Vector<Location>,
    pub matched_cards: Vector<Card>,
    pub guess_count: u32,
    pub match_count: u32,
    pub phase: GamePhase,
}

/// Saved field values handed back to the engine by the codec.
#[derive(Clone, Debug)]
pub(crate) struct SavedState {
    pub card_count: usize,
    pub identities_in_use: Vec<Identity>,
    pub unmatched_cards: Vec<Card>,
    pub unmatched_locations: Vec<Location>,
    pub matched_cards: Vec<Card>,
    pub guess_count: u32,
    pub match_count: u32,
}

/// Memory-matching game state.
///
/// ## Example
///
/// ```
/// use memory_match::game::MatchingGame;
/// use memory_match::core::Location;
///
/// let mut game = MatchingGame::with_seed(42);
/// assert_eq!(game.card_count(), 4);
///
/// // Find the partner of the card at location 1
/// let first = game.find_card(Location(1)).unwrap().identity();
/// let partner = game
///     .unmatched_cards()
///     .iter()
///     .find(|c| c.location() != Location(1) && c.identity() == first)
///     .unwrap()
///     .location();
///
/// let outcome = game.resolve_pair(Location(1), partner).unwrap();
/// assert!(outcome.is_match());
/// assert_eq!(game.match_count(), 1);
/// assert!(!game.check_game_over());
/// ```
#[derive(Clone, Debug)]
pub struct MatchingGame {
    pool: IdentityPool,
    arranger: BoardArranger,
    card_count: usize,
    identities_in_use: Vector<Identity>,
    unmatched_cards: Vector<Card>,
    unmatched_locations: Vector<Location>,
    matched_cards: Vector<Card>,
    guess_count: u32,
    match_count: u32,
}

impl Default for MatchingGame {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchingGame {
    /// A fresh 4-card game (pairs A and B) on a randomly arranged board.
    #[must_use]
    pub fn new() -> Self {
        Self::deal(IdentityPool::standard(), BoardArranger::from_entropy(), MIN_PAIRS)
    }

    /// A fresh 4-card game with a reproducible arrangement.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::deal(
            IdentityPool::standard(),
            BoardArranger::new(GameRng::new(seed)),
            MIN_PAIRS,
        )
    }

    /// A fresh game built from `config`.
    pub fn with_config(config: &GameConfig) -> Result<Self> {
        let pool = config.identity_pool()?;
        let arranger = BoardArranger::new(GameRng::from_seed_or_entropy(config.seed));
        Ok(Self::deal(pool, arranger, config.initial_pairs))
    }

    fn deal(pool: IdentityPool, arranger: BoardArranger, pairs: usize) -> Self {
        let identities: Vector<Identity> = pool.tokens().iter().copied().take(pairs).collect();
        let unmatched_cards = identities
            .iter()
            .flat_map(|&identity| [Card::new(identity), Card::new(identity)])
            .collect();
        let card_count = identities.len() * 2;

        let mut game = Self {
            pool,
            arranger,
            card_count,
            identities_in_use: identities,
            unmatched_cards,
            unmatched_locations: Vector::new(),
            matched_cards: Vector::new(),
            guess_count: 0,
            match_count: 0,
        };
        game.rearrange();
        debug!(
            cards = game.card_count,
            seed = game.arranger.seed(),
            "new game dealt"
        );
        game
    }

    /// Rebuild a game from saved fields. The codec has already validated them.
    pub(crate) fn restore(pool: IdentityPool, arranger: BoardArranger, saved: SavedState) -> Self {
        Self {
            pool,
            arranger,
            card_count: saved.card_count,
            identities_in_use: saved.identities_in_use.into_iter().collect(),
            unmatched_cards: saved.unmatched_cards.into_iter().collect(),
            unmatched_locations: saved.unmatched_locations.into_iter().collect(),
            matched_cards: saved.matched_cards.into_iter().collect(),
            guess_count: saved.guess_count,
            match_count: saved.match_count,
        }
    }

    // === Board Growth ===

    /// Deal a new pair with the next unused identity and rearrange the board.
    ///
    /// Returns the new identity, or `None` (leaving the game unchanged) once
    /// the pool is exhausted. Guess and match counts carry over.
    pub fn add_card_pair(&mut self) -> Option<Identity> {
        let Some(identity) = self.find_unused_identity() else {
            warn!(cards = self.card_count, "identity pool exhausted, no pair added");
            return None;
        };

        self.add_new_card_identity(identity);
        self.unmatched_cards.push_back(Card::new(identity));
        self.unmatched_cards.push_back(Card::new(identity));
        self.card_count += 2;
        self.rearrange();

        debug!(%identity, cards = self.card_count, "card pair added");
        Some(identity)
    }

    /// First pool identity not yet in the game, or `None` if all are in use.
    #[must_use]
    pub fn find_unused_identity(&self) -> Option<Identity> {
        self.pool.next_unused(&self.identities_in_use)
    }

    /// Record `identity` as in use. Does nothing if it already is.
    pub(crate) fn add_new_card_identity(&mut self, identity: Identity) {
        if !self.identities_in_use.iter().any(|i| *i == identity) {
            self.identities_in_use.push_back(identity);
        }
    }

    /// Assign fresh locations `1..=N` to the unmatched cards.
    fn rearrange(&mut self) {
        self.arranger.arrange(self.unmatched_cards.iter_mut());
        self.unmatched_locations = Location::range(self.unmatched_cards.len()).collect();
    }

    // === Guessing ===

    /// Flag the card at `location` as being guessed.
    ///
    /// Returns `false` (and does nothing) if no unmatched card is there.
    pub fn guess_card(&mut self, location: Location) -> bool {
        match self.index_of(location) {
            Some(index) => {
                self.unmatched_cards[index].mark_guessed();
                true
            }
            None => false,
        }
    }

    /// Clear the guess flag of the card at `location`, if there is one.
    pub fn unguess_card(&mut self, location: Location) -> bool {
        match self.index_of(location) {
            Some(index) => {
                self.unmatched_cards[index].unmark_guessed();
                true
            }
            None => false,
        }
    }

    /// Clear every guess flag on the board.
    pub fn clear_guesses(&mut self) {
        for card in self.unmatched_cards.iter_mut().filter(|c| c.is_being_guessed()) {
            card.unmark_guessed();
        }
    }

    /// Check if the cards at two distinct locations share an identity.
    ///
    /// Does not count as a guess.
    pub fn is_match(&self, first: Location, second: Location) -> Result<bool> {
        if first == second {
            return Err(MatchError::invalid_state(format!(
                "cannot compare {} with itself",
                first
            )));
        }
        let a = self.require(first)?;
        let b = self.require(second)?;
        Ok(a.pairs_with(b))
    }

    /// Count one pair-guess, whatever its outcome.
    pub fn count_guess(&mut self) {
        self.guess_count += 1;
    }

    /// Count one successful pair.
    pub fn count_match(&mut self) -> Result<()> {
        if self.match_count as usize >= self.pair_count() {
            return Err(MatchError::invalid_state(format!(
                "all {} pairs are already matched",
                self.pair_count()
            )));
        }
        self.match_count += 1;
        Ok(())
    }

    /// Retire the card at `location` to the end of the matched pile.
    pub fn remove_from_board(&mut self, location: Location) -> Result<()> {
        let index = self
            .index_of(location)
            .ok_or(MatchError::NotFound { location })?;

        let mut card = self.unmatched_cards[index].clone();
        card.mark_matched()?;

        self.unmatched_cards.remove(index);
        if let Some(slot) = self.unmatched_locations.iter().position(|l| *l == location) {
            self.unmatched_locations.remove(slot);
        }
        debug!(identity = %card.identity(), %location, "card removed from board");
        self.matched_cards.push_back(card);
        Ok(())
    }

    /// Resolve a guessed pair in one step.
    ///
    /// Counts the guess, then either counts the match and removes both cards
    /// or clears both guess flags.
    pub fn resolve_pair(&mut self, first: Location, second: Location) -> Result<GuessOutcome> {
        let matched = self.is_match(first, second)?;
        if matched && self.match_count as usize >= self.pair_count() {
            return Err(MatchError::invalid_state("match count already at its maximum"));
        }

        self.count_guess();
        let outcome = if matched {
            let identity = self.require(first)?.identity();
            self.count_match()?;
            self.remove_from_board(first)?;
            self.remove_from_board(second)?;
            GuessOutcome::Match(identity)
        } else {
            self.unguess_card(first);
            self.unguess_card(second);
            GuessOutcome::Miss
        };

        debug!(
            %first,
            %second,
            matched = outcome.is_match(),
            guesses = self.guess_count,
            "pair resolved"
        );
        if self.check_game_over() {
            info!(
                guesses = self.guess_count,
                matches = self.match_count,
                "game over"
            );
        }
        Ok(outcome)
    }

    /// Check if every pair has been found.
    #[must_use]
    pub fn check_game_over(&self) -> bool {
        self.match_count as usize == self.pair_count()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.check_game_over() {
            GamePhase::Over
        } else if self.guess_count == 0 && self.matched_cards.is_empty() {
            GamePhase::NotStarted
        } else {
            GamePhase::InProgress
        }
    }

    // === Lookup ===

    /// The unmatched card at `location`, if any.
    #[must_use]
    pub fn find_card(&self, location: Location) -> Option<&Card> {
        self.unmatched_cards.iter().find(|c| c.location() == location)
    }

    fn index_of(&self, location: Location) -> Option<usize> {
        self.unmatched_cards.iter().position(|c| c.location() == location)
    }

    fn require(&self, location: Location) -> Result<&Card> {
        self.find_card(location)
            .ok_or(MatchError::NotFound { location })
    }

    // === Accessors ===

    /// Total cards ever dealt.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.card_count / 2
    }

    /// Identities dealt so far, in pool order.
    #[must_use]
    pub fn identities_in_use(&self) -> &Vector<Identity> {
        &self.identities_in_use
    }

    #[must_use]
    pub fn unmatched_cards(&self) -> &Vector<Card> {
        &self.unmatched_cards
    }

    /// Locations of the cards still on the board.
    #[must_use]
    pub fn unmatched_locations(&self) -> &Vector<Location> {
        &self.unmatched_locations
    }

    /// Matched cards, oldest match first.
    #[must_use]
    pub fn matched_cards(&self) -> &Vector<Card> {
        &self.matched_cards
    }

    #[must_use]
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    #[must_use]
    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    #[must_use]
    pub fn identity_pool(&self) -> &IdentityPool {
        &self.pool
    }

    /// Seed of the board arranger's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.arranger.seed()
    }

    /// Owned view of the board for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            card_count: self.card_count,
            unmatched_cards: self.unmatched_cards.clone(),
            unmatched_locations: self.unmatched_locations.clone(),
            matched_cards: self.matched_cards.clone(),
            guess_count: self.guess_count,
            match_count: self.match_count,
            phase: self.phase(),
        }
    }
}
