//! Engine configuration.
//!
//! A `GameConfig` fixes everything about a game that is not part of its
//! saved state:
//! - the ordered identity alphabet
//! - how many pairs a fresh game deals
//! - the RNG seed (or OS entropy)
//! - the reveal delay a presentation layer should honor
//! - the default save file location
//!
//! Configs can be built in code or loaded from TOML. Missing keys fall back
//! to the defaults.
//!
//! ```
//! use memory_match::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str(r#"
//!     alphabet = "XYZ"
//!     seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.alphabet, "XYZ");
//! assert_eq!(config.initial_pairs, 2);
//! assert_eq!(config.seed, Some(7));
//! ```

use std::path::PathBuf;
use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Identity, IdentityPool};
use crate::error::{MatchError, Result};

/// The standard A-Z identity alphabet.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Fewest pairs a game can start with.
pub const MIN_PAIRS: usize = 2;

/// Configuration for a matching game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Ordered identity tokens, one ASCII letter each.
    pub alphabet: String,

    /// Pairs dealt when a game is created.
    pub initial_pairs: usize,

    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Milliseconds a UI should wait between the second reveal and resolving the pair.
    pub reveal_delay_ms: u64,

    /// Default save file.
    pub save_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            initial_pairs: MIN_PAIRS,
            seed: None,
            reveal_delay_ms: 1000,
            save_path: PathBuf::from("./data/MatchingGame.json"),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| MatchError::invalid_state(format!("invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Use a custom identity alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Deal `pairs` pairs when the game is created.
    #[must_use]
    pub fn with_initial_pairs(mut self, pairs: usize) -> Self {
        self.initial_pairs = pairs;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_reveal_delay_ms(mut self, millis: u64) -> Self {
        self.reveal_delay_ms = millis;
        self
    }

    #[must_use]
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Reveal delay as a `Duration`.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Check the configuration for values no game can start from.
    pub fn validate(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for c in self.alphabet.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(MatchError::invalid_state(format!(
                    "alphabet may only contain letters, got {:?}",
                    c
                )));
            }
            if !seen.insert(c) {
                return Err(MatchError::invalid_state(format!(
                    "alphabet contains '{}' more than once",
                    c
                )));
            }
        }
        if seen.len() < MIN_PAIRS {
            return Err(MatchError::invalid_state(format!(
                "alphabet needs at least {} identities, got {}",
                MIN_PAIRS,
                seen.len()
            )));
        }
        if self.initial_pairs < MIN_PAIRS || self.initial_pairs > seen.len() {
            return Err(MatchError::invalid_state(format!(
                "initial_pairs must be within {}..={}, got {}",
                MIN_PAIRS,
                seen.len(),
                self.initial_pairs
            )));
        }
        Ok(())
    }

    /// Build the identity pool described by `alphabet`.
    pub fn identity_pool(&self) -> Result<IdentityPool> {
        self.validate()?;
        Ok(IdentityPool::new(self.alphabet.chars().map(Identity::new)))
    }
}
