//! Board arrangement: random, collision-free placement of unmatched cards.

pub mod arranger;

pub use arranger::BoardArranger;
