//! Random board arrangement.
//!
//! The `BoardArranger` assigns locations `1..=N` to the `N` unmatched cards
//! as a uniformly random permutation. It always rebuilds the whole board;
//! there is no incremental placement of a partial arrangement.

use tracing::debug;

use crate::cards::Card;
use crate::core::{GameRng, Location};

/// Places cards on the board using an injected randomness provider.
///
/// ## Usage
///
/// ```
/// use memory_match::board::BoardArranger;
/// use memory_match::cards::{Card, Identity};
/// use memory_match::core::{GameRng, Location};
///
/// let mut arranger = BoardArranger::new(GameRng::new(42));
/// let mut cards = vec![
///     Card::new(Identity::new('A')),
///     Card::new(Identity::new('A')),
///     Card::new(Identity::new('B')),
///     Card::new(Identity::new('B')),
/// ];
///
/// arranger.arrange(cards.iter_mut());
///
/// let mut slots: Vec<_> = cards.iter().map(|c| c.location()).collect();
/// slots.sort();
/// assert_eq!(slots, vec![Location(1), Location(2), Location(3), Location(4)]);
/// ```
#[derive(Clone, Debug)]
pub struct BoardArranger {
    rng: GameRng,
}

impl BoardArranger {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Arranger seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// A random permutation of `Location(1)..=Location(count)`.
    #[must_use]
    pub fn permutation(&mut self, count: usize) -> Vec<Location> {
        let mut slots: Vec<Location> = Location::range(count).collect();
        self.rng.shuffle(&mut slots);
        slots
    }

    /// Give every card a distinct location in `1..=N`, where `N` is the number of cards.
    pub fn arrange<'a>(&mut self, cards: impl IntoIterator<Item = &'a mut Card>) {
        let mut cards: Vec<&mut Card> = cards.into_iter().collect();
        let slots = self.permutation(cards.len());

        for (card, slot) in cards.iter_mut().zip(slots) {
            card.place(slot);
        }

        debug!(cards = cards.len(), "board arranged");
    }
}
