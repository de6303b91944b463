//! # memory-match
//!
//! Game-state engine for a memory-matching card game.
//!
//! Pairs of cards sharing an identity are dealt onto a randomly arranged
//! board. The player guesses two locations at a time; matching pairs are
//! retired to the matched pile, and the game ends when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: No rendering, input handling, or timers. A
//!    presentation layer calls engine operations and re-reads accessors.
//!
//! 2. **Atomic operations**: Every operation either succeeds with all game
//!    invariants intact or fails with a `MatchError` and changes nothing.
//!
//! 3. **Injectable everything**: The identity alphabet and the RNG come in
//!    through `GameConfig`, so tests can use small alphabets and fixed seeds.
//!
//! ## Modules
//!
//! - `core`: Locations, seedable RNG, configuration
//! - `cards`: Identities, identity pool, cards
//! - `board`: Random board arrangement
//! - `game`: `MatchingGame` engine and `PlaySession` guess turns
//! - `persistence`: Save records, codec, save file storage
//!
//! ## Example
//!
//! ```
//! use memory_match::{GameStateCodec, MatchingGame};
//!
//! let mut game = MatchingGame::with_seed(7);
//! game.add_card_pair();
//! assert_eq!(game.card_count(), 6);
//!
//! let json = GameStateCodec::to_json(&game).unwrap();
//! let restored = GameStateCodec::from_json(&json).unwrap();
//! assert_eq!(restored.unmatched_cards(), game.unmatched_cards());
//! ```

pub mod core;
pub mod cards;
pub mod board;
pub mod game;
pub mod persistence;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Location};

pub use crate::cards::{Card, Identity, IdentityPool};

pub use crate::board::BoardArranger;

pub use crate::game::{BoardSnapshot, GamePhase, GuessOutcome, MatchingGame, Pick, PlaySession};

pub use crate::persistence::{CardRecord, GameStateCodec, SaveRecord, SaveStore};

pub use crate::error::{MatchError, Result};
