//! Core engine types: locations, RNG, configuration.
//!
//! These are the building blocks every other module depends on. Games
//! configure the engine via `GameConfig` rather than through globals.

pub mod location;
pub mod rng;
pub mod config;

pub use location::Location;
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_ALPHABET, MIN_PAIRS};
