//! The matching game: engine state machine and guess turns.
//!
//! - `MatchingGame`: owns cards and counters, exposes every game operation
//! - `PlaySession`: tracks the two picks of a turn on top of a game
//!
//! The engine never sleeps or schedules anything. A UI that wants a pause
//! between revealing the second card and resolving the pair waits for
//! `Pick::ReadyToResolve { delay }` itself, then calls `resolve`.

mod engine;
mod session;

pub use engine::{BoardSnapshot, GamePhase, GuessOutcome, MatchingGame};
pub(crate) use engine::SavedState;
pub use session::{Pick, PlaySession};
