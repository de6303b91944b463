//! Card system: identities, the identity pool, and cards.
//!
//! ## Key Types
//!
//! - `Identity`: Token shared by the two cards of a pair
//! - `IdentityPool`: Ordered supply of identities for new pairs
//! - `Card`: Identity plus location, matched, and being-guessed state

pub mod card;
pub mod identity;

pub use card::Card;
pub use identity::{Identity, IdentityPool};
