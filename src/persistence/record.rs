//! Save record wire types.
//!
//! A `SaveRecord` is the flat, JSON-compatible form of a game:
//!
//! ```json
//! {
//!     "cardAmount": 6,
//!     "cardIdentities": ["A", "B", "C"],
//!     "unmatchedCards": [{"identity": "C", "location": 1, "status": false}],
//!     "unmatchedLocationNumbers": [1],
//!     "matchedCards": [{"identity": "A", "location": 2, "status": true}],
//!     "numberOfGuesses": 5,
//!     "numberOfMatches": 2
//! }
//! ```
//!
//! Parsing from JSON goes through `SaveRecord::from_json_value`, which reads
//! field by field so errors name the field at fault.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cards::{Card, Identity};
use crate::core::Location;
use crate::error::{MatchError, Result};

pub const CARD_AMOUNT: &str = "cardAmount";
pub const CARD_IDENTITIES: &str = "cardIdentities";
pub const UNMATCHED_CARDS: &str = "unmatchedCards";
pub const UNMATCHED_LOCATION_NUMBERS: &str = "unmatchedLocationNumbers";
pub const MATCHED_CARDS: &str = "matchedCards";
pub const NUMBER_OF_GUESSES: &str = "numberOfGuesses";
pub const NUMBER_OF_MATCHES: &str = "numberOfMatches";

/// One card as persisted. `status` is true once matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRecord {
    pub identity: Identity,
    pub location: Location,
    pub status: bool,
}

impl From<&Card> for CardRecord {
    fn from(card: &Card) -> Self {
        Self {
            identity: card.identity(),
            location: card.location(),
            status: card.is_matched(),
        }
    }
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        Card::restore(record.identity, record.location, record.status)
    }
}

/// Flat persisted form of a `MatchingGame`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecord {
    pub card_amount: usize,
    pub card_identities: Vec<Identity>,
    pub unmatched_cards: Vec<CardRecord>,
    pub unmatched_location_numbers: Vec<Location>,
    pub matched_cards: Vec<CardRecord>,
    pub number_of_guesses: u32,
    pub number_of_matches: u32,
}

impl SaveRecord {
    /// Read a record from parsed JSON, one field at a time.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            return Err(MatchError::decode("record", "expected a JSON object"));
        };

        Ok(Self {
            card_amount: take_field(&mut fields, CARD_AMOUNT)?,
            card_identities: take_field(&mut fields, CARD_IDENTITIES)?,
            unmatched_cards: take_field(&mut fields, UNMATCHED_CARDS)?,
            unmatched_location_numbers: take_field(&mut fields, UNMATCHED_LOCATION_NUMBERS)?,
            matched_cards: take_field(&mut fields, MATCHED_CARDS)?,
            number_of_guesses: take_field(&mut fields, NUMBER_OF_GUESSES)?,
            number_of_matches: take_field(&mut fields, NUMBER_OF_MATCHES)?,
        })
    }
}

fn take_field<T: DeserializeOwned>(fields: &mut Map<String, Value>, name: &str) -> Result<T> {
    let value = fields
        .remove(name)
        .ok_or_else(|| MatchError::decode(name, "missing field"))?;
    serde_json::from_value(value).map_err(|e| MatchError::decode(name, e.to_string()))
}
