//! Save and restore.
//!
//! - `SaveRecord`: flat wire form of a game
//! - `GameStateCodec`: game <-> record, JSON and binary
//! - `SaveStore`: one JSON save file on disk
//!
//! Encoding and decoding happen only at explicit save/load points, never in
//! the middle of a game operation.

pub mod codec;
pub mod record;
pub mod store;

pub use codec::GameStateCodec;
pub use record::{CardRecord, SaveRecord};
pub use store::SaveStore;
