//! Card identities and the pool they are drawn from.
//!
//! An `Identity` is the token two cards share to form a pair. The
//! `IdentityPool` is an ordered, stateless list of the tokens a game may use;
//! the engine owns one and asks it for the first token not yet in play.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_ALPHABET;

/// A single-character identity token.
///
/// Serialized as a one-character string (`"A"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(char);

impl Identity {
    #[must_use]
    pub const fn new(token: char) -> Self {
        Self(token)
    }

    /// The underlying character.
    #[must_use]
    pub const fn token(self) -> char {
        self.0
    }
}

impl TryFrom<String> for Identity {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(format!("identity must be a single character, got {:?}", value)),
        }
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.0.to_string()
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered supply of identity tokens.
///
/// The pool never changes after construction. Which tokens are in use is
/// tracked by the game, which passes them back in on each query.
///
/// ```
/// use memory_match::cards::{Identity, IdentityPool};
///
/// let pool = IdentityPool::standard();
/// let in_use = [Identity::new('A'), Identity::new('B')];
/// assert_eq!(pool.next_unused(&in_use), Some(Identity::new('C')));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityPool {
    tokens: Vec<Identity>,
}

impl IdentityPool {
    /// Create a pool from tokens in draw order.
    ///
    /// Repeated tokens after the first occurrence are dropped.
    pub fn new(tokens: impl IntoIterator<Item = Identity>) -> Self {
        let mut seen = FxHashSet::default();
        let tokens = tokens.into_iter().filter(|t| seen.insert(*t)).collect();
        Self { tokens }
    }

    /// The A-Z pool.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(DEFAULT_ALPHABET.chars().map(Identity::new))
    }

    /// All tokens in draw order.
    #[must_use]
    pub fn tokens(&self) -> &[Identity] {
        &self.tokens
    }

    /// Number of distinct tokens, i.e. the most pairs a board can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn contains(&self, identity: Identity) -> bool {
        self.tokens.contains(&identity)
    }

    /// First token in pool order that is absent from `in_use`.
    ///
    /// Returns `None` once every token is in use.
    #[must_use]
    pub fn next_unused<'a>(
        &self,
        in_use: impl IntoIterator<Item = &'a Identity>,
    ) -> Option<Identity> {
        let in_use: FxHashSet<Identity> = in_use.into_iter().copied().collect();
        self.tokens.iter().copied().find(|t| !in_use.contains(t))
    }
}

impl Default for IdentityPool {
    fn default() -> Self {
        Self::standard()
    }
}
