//! Converting games to and from `SaveRecord`s.
//!
//! `decode(encode(g))` is observationally identical to `g`: every accessor
//! returns the same values and every later operation behaves the same,
//! except that board rearrangements draw from a fresh RNG.
//!
//! Decoding checks the record against the game invariants before building
//! anything, so a bad record never yields a half-valid game.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::debug;

use super::record::{
    CardRecord, SaveRecord, CARD_AMOUNT, CARD_IDENTITIES, MATCHED_CARDS, NUMBER_OF_MATCHES,
    UNMATCHED_CARDS, UNMATCHED_LOCATION_NUMBERS,
};
use crate::board::BoardArranger;
use crate::cards::{Identity, IdentityPool};
use crate::core::{GameConfig, GameRng, Location, MIN_PAIRS};
use crate::error::{MatchError, Result};
use crate::game::{MatchingGame, SavedState};

/// Stateless encoder/decoder for game state.
pub struct GameStateCodec;

impl GameStateCodec {
    /// Capture the persistent state of `game`.
    ///
    /// Guess flags are transient and not saved.
    #[must_use]
    pub fn encode(game: &MatchingGame) -> SaveRecord {
        SaveRecord {
            card_amount: game.card_count(),
            card_identities: game.identities_in_use().iter().copied().collect(),
            unmatched_cards: game.unmatched_cards().iter().map(CardRecord::from).collect(),
            unmatched_location_numbers: game.unmatched_locations().iter().copied().collect(),
            matched_cards: game.matched_cards().iter().map(CardRecord::from).collect(),
            number_of_guesses: game.guess_count(),
            number_of_matches: game.match_count(),
        }
    }

    /// Rebuild a game with the standard pool and an entropy-seeded arranger.
    ///
    /// Only games dealt from the standard A-Z alphabet restore faithfully
    /// this way. Games built from a custom `GameConfig` go through
    /// `decode_with`.
    pub fn decode(record: SaveRecord) -> Result<MatchingGame> {
        Self::decode_parts(record, IdentityPool::standard(), BoardArranger::from_entropy())
    }

    /// Rebuild a game using the alphabet and seed of `config`.
    pub fn decode_with(record: SaveRecord, config: &GameConfig) -> Result<MatchingGame> {
        let pool = config.identity_pool()?;
        let arranger = BoardArranger::new(GameRng::from_seed_or_entropy(config.seed));
        Self::decode_parts(record, pool, arranger)
    }

    fn decode_parts(
        record: SaveRecord,
        pool: IdentityPool,
        arranger: BoardArranger,
    ) -> Result<MatchingGame> {
        validate(&record, &pool)?;
        debug!(
            cards = record.card_amount,
            unmatched = record.unmatched_cards.len(),
            "save record decoded"
        );

        let saved = SavedState {
            card_count: record.card_amount,
            identities_in_use: record.card_identities,
            unmatched_cards: record.unmatched_cards.into_iter().map(Into::into).collect(),
            unmatched_locations: record.unmatched_location_numbers,
            matched_cards: record.matched_cards.into_iter().map(Into::into).collect(),
            guess_count: record.number_of_guesses,
            match_count: record.number_of_matches,
        };
        Ok(MatchingGame::restore(pool, arranger, saved))
    }

    /// Encode `game` as pretty JSON with 4-space indentation.
    pub fn to_json(game: &MatchingGame) -> Result<String> {
        let record = Self::encode(game);
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        record
            .serialize(&mut serializer)
            .map_err(|e| MatchError::invalid_state(format!("cannot encode game: {}", e)))?;
        String::from_utf8(out)
            .map_err(|e| MatchError::invalid_state(format!("encoded JSON is not UTF-8: {}", e)))
    }

    /// Decode a game from JSON text onto the standard pool.
    pub fn from_json(json: &str) -> Result<MatchingGame> {
        Self::decode(parse_json(json)?)
    }

    /// Decode a game from JSON text using `config`'s alphabet and seed.
    pub fn from_json_with(json: &str, config: &GameConfig) -> Result<MatchingGame> {
        Self::decode_with(parse_json(json)?, config)
    }

    /// Compact binary encoding of the same record.
    pub fn to_bytes(game: &MatchingGame) -> Result<Vec<u8>> {
        bincode::serialize(&Self::encode(game))
            .map_err(|e| MatchError::invalid_state(format!("cannot encode game: {}", e)))
    }

    /// Decode a game from `to_bytes` output.
    pub fn from_bytes(bytes: &[u8]) -> Result<MatchingGame> {
        let record: SaveRecord =
            bincode::deserialize(bytes).map_err(|e| MatchError::decode("record", e.to_string()))?;
        Self::decode(record)
    }
}

fn parse_json(json: &str) -> Result<SaveRecord> {
    let value =
        serde_json::from_str(json).map_err(|e| MatchError::decode("record", e.to_string()))?;
    SaveRecord::from_json_value(value)
}

/// Check a record against the game invariants.
fn validate(record: &SaveRecord, pool: &IdentityPool) -> Result<()> {
    let card_amount = record.card_amount;
    if card_amount < MIN_PAIRS * 2 || card_amount % 2 != 0 {
        return Err(MatchError::decode(
            CARD_AMOUNT,
            format!("must be even and at least {}, got {}", MIN_PAIRS * 2, card_amount),
        ));
    }

    // Identities: known to the pool, no repeats, one per pair
    let mut identities = FxHashSet::default();
    for &identity in &record.card_identities {
        if !pool.contains(identity) {
            return Err(MatchError::decode(
                CARD_IDENTITIES,
                format!("'{}' is not in the identity alphabet", identity),
            ));
        }
        if !identities.insert(identity) {
            return Err(MatchError::decode(
                CARD_IDENTITIES,
                format!("'{}' appears more than once", identity),
            ));
        }
    }
    if identities.len() != card_amount / 2 {
        return Err(MatchError::decode(
            CARD_IDENTITIES,
            format!("expected {} identities, got {}", card_amount / 2, identities.len()),
        ));
    }

    let total = record.unmatched_cards.len() + record.matched_cards.len();
    if total != card_amount {
        return Err(MatchError::decode(
            CARD_AMOUNT,
            format!("{} cards declared but {} saved", card_amount, total),
        ));
    }

    // Card fields and per-identity counts
    let mut per_identity: FxHashMap<Identity, usize> = FxHashMap::default();
    let lists = [
        (UNMATCHED_CARDS, &record.unmatched_cards, false),
        (MATCHED_CARDS, &record.matched_cards, true),
    ];
    for (field, cards, matched) in lists {
        for card in cards {
            if !card.location.is_placed() {
                return Err(MatchError::decode(field, "card locations must be positive"));
            }
            if card.status != matched {
                return Err(MatchError::decode(
                    field,
                    format!(
                        "card {} at {} has status {}",
                        card.identity, card.location, card.status
                    ),
                ));
            }
            if !identities.contains(&card.identity) {
                return Err(MatchError::decode(
                    field,
                    format!("identity '{}' is not listed in {}", card.identity, CARD_IDENTITIES),
                ));
            }
            *per_identity.entry(card.identity).or_default() += 1;
        }
    }
    if let Some((identity, count)) = per_identity.iter().find(|&(_, &count)| count != 2) {
        return Err(MatchError::decode(
            CARD_IDENTITIES,
            format!("identity '{}' is on {} cards, expected 2", identity, count),
        ));
    }

    // Unmatched locations: unique, in range, one-to-one with the cards
    let mut card_locations = FxHashSet::default();
    for card in &record.unmatched_cards {
        if card.location.raw() as usize > card_amount {
            return Err(MatchError::decode(
                UNMATCHED_CARDS,
                format!("{} is beyond the {}-card board", card.location, card_amount),
            ));
        }
        if !card_locations.insert(card.location) {
            return Err(MatchError::decode(
                UNMATCHED_CARDS,
                format!("two cards share {}", card.location),
            ));
        }
    }
    let listed: FxHashSet<Location> = record.unmatched_location_numbers.iter().copied().collect();
    if listed.len() != record.unmatched_location_numbers.len() || listed != card_locations {
        return Err(MatchError::decode(
            UNMATCHED_LOCATION_NUMBERS,
            "must list each unmatched card location exactly once",
        ));
    }

    if record.number_of_matches as usize > card_amount / 2 {
        return Err(MatchError::decode(
            NUMBER_OF_MATCHES,
            format!("{} matches exceed {} pairs", record.number_of_matches, card_amount / 2),
        ));
    }

    Ok(())
}
