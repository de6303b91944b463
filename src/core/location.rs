//! Board location numbers.
//!
//! Every unmatched card occupies a `Location` numbered from 1. Location 0 is
//! reserved for cards that have been dealt but not yet placed.
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::Location;
//!
//! let slot = Location::new(3);
//! assert!(slot.is_placed());
//! assert!(!Location::UNPLACED.is_placed());
//!
//! let all: Vec<_> = Location::range(4).collect();
//! assert_eq!(all, vec![Location(1), Location(2), Location(3), Location(4)]);
//! ```

use serde::{Deserialize, Serialize};

/// A card's slot on the board.
///
/// Serialized as a bare integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(pub u32);

impl Location {
    /// Marker for a card that has not been placed yet.
    pub const UNPLACED: Location = Location(0);

    /// Create a location from its number.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the raw location number.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a real board slot (not `UNPLACED`).
    #[must_use]
    pub const fn is_placed(self) -> bool {
        self.0 > 0
    }

    /// Iterate `Location(1)..=Location(count)` in ascending order.
    pub fn range(count: usize) -> impl Iterator<Item = Location> {
        (1..=count as u32).map(Location)
    }
}

impl From<u32> for Location {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Location({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unplaced() {
        assert_eq!(Location::UNPLACED.raw(), 0);
        assert!(!Location::UNPLACED.is_placed());
        assert!(Location::new(1).is_placed());
    }

    #[test]
    fn test_range() {
        assert_eq!(Location::range(0).count(), 0);
        let slots: Vec<u32> = Location::range(6).map(Location::raw).collect();
        assert_eq!(slots, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_ordering() {
        assert!(Location(2) < Location(10));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Location(42)), "Location(42)");
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Location(5)).unwrap();
        assert_eq!(json, "5");
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Location(5));
    }
}
