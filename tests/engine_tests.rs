//! Engine scenario tests.
//!
//! These play whole games through the public API and check the game
//! invariants after every step.

use std::collections::HashMap;

use memory_match::cards::Identity;
use memory_match::core::{GameConfig, Location};
use memory_match::error::MatchError;
use memory_match::game::{GamePhase, GuessOutcome, MatchingGame};

/// Assert every engine invariant.
fn assert_invariants(game: &MatchingGame) {
    // Card totals
    assert_eq!(
        game.unmatched_cards().len() + game.matched_cards().len(),
        game.card_count()
    );

    // Each identity on exactly two cards
    let mut counts: HashMap<Identity, usize> = HashMap::new();
    for card in game.unmatched_cards().iter().chain(game.matched_cards().iter()) {
        *counts.entry(card.identity()).or_default() += 1;
    }
    assert_eq!(counts.len(), game.identities_in_use().len());
    assert!(counts.values().all(|&n| n == 2));

    // Location set matches unmatched cards
    let mut from_cards: Vec<Location> =
        game.unmatched_cards().iter().map(|c| c.location()).collect();
    let mut listed: Vec<Location> = game.unmatched_locations().iter().copied().collect();
    from_cards.sort();
    listed.sort();
    assert_eq!(from_cards, listed);
    listed.dedup();
    assert_eq!(listed.len(), game.unmatched_cards().len());

    // Counters
    assert!(game.match_count() as usize <= game.card_count() / 2);
    assert_eq!(game.check_game_over(), game.match_count() as usize == game.card_count() / 2);

    // Status flags
    assert!(game.matched_cards().iter().all(|c| c.is_matched()));
    assert!(game.unmatched_cards().iter().all(|c| !c.is_matched()));
}

/// Location of the partner of the card at `location`.
fn partner_of(game: &MatchingGame, location: Location) -> Location {
    let identity = game.find_card(location).unwrap().identity();
    game.unmatched_cards()
        .iter()
        .find(|c| c.location() != location && c.identity() == identity)
        .unwrap()
        .location()
}

/// Play one correct pair using the step-by-step protocol.
fn play_correct_pair(game: &mut MatchingGame) {
    let first = game.unmatched_cards()[0].location();
    let second = partner_of(game, first);

    assert!(game.guess_card(first));
    assert!(game.guess_card(second));
    assert!(game.is_match(first, second).unwrap());
    game.count_guess();
    game.count_match().unwrap();
    game.remove_from_board(first).unwrap();
    game.remove_from_board(second).unwrap();
}

#[test]
fn test_new_game_scenario() {
    let game = MatchingGame::new();

    assert_eq!(game.card_count(), 4);
    assert_eq!(
        game.identities_in_use().iter().map(|i| i.token()).collect::<String>(),
        "AB"
    );
    assert_eq!(game.unmatched_cards().len(), 4);
    assert_eq!(
        game.unmatched_locations().iter().map(|l| l.raw()).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert!(game.matched_cards().is_empty());
    assert_eq!(game.guess_count(), 0);
    assert_eq!(game.match_count(), 0);
    assert_eq!(game.find_unused_identity(), Some(Identity::new('C')));
    assert_invariants(&game);
}

#[test]
fn test_first_match_scenario() {
    let mut game = MatchingGame::with_seed(21);

    play_correct_pair(&mut game);

    assert_eq!(game.guess_count(), 1);
    assert_eq!(game.match_count(), 1);
    assert_eq!(game.matched_cards().len(), 2);
    assert_eq!(game.unmatched_cards().len(), 2);
    assert!(!game.check_game_over());
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert_invariants(&game);
}

#[test]
fn test_game_over_is_idempotent() {
    let mut game = MatchingGame::with_seed(22);

    play_correct_pair(&mut game);
    play_correct_pair(&mut game);

    assert!(game.check_game_over());
    let before = game.snapshot();
    assert!(game.check_game_over());
    assert!(game.check_game_over());
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.phase(), GamePhase::Over);
    assert_invariants(&game);
}

#[test]
fn test_miss_then_match() {
    let mut game = MatchingGame::with_seed(23);
    let first = game.unmatched_cards()[0].location();
    let partner = partner_of(&game, first);
    let stranger = game
        .unmatched_locations()
        .iter()
        .copied()
        .find(|&l| l != first && l != partner)
        .unwrap();

    game.guess_card(first);
    game.guess_card(stranger);
    assert_eq!(game.resolve_pair(first, stranger).unwrap(), GuessOutcome::Miss);
    assert_invariants(&game);

    let identity = game.find_card(first).unwrap().identity();
    assert_eq!(
        game.resolve_pair(partner, first).unwrap(),
        GuessOutcome::Match(identity)
    );
    assert_eq!(game.guess_count(), 2);
    assert_eq!(game.match_count(), 1);
    assert_invariants(&game);
}

#[test]
fn test_exhaust_identity_pool() {
    let mut game = MatchingGame::with_seed(24);

    for _ in 0..24 {
        assert!(game.add_card_pair().is_some());
        assert_invariants(&game);
    }
    assert_eq!(game.card_count(), 52);
    assert_eq!(game.identities_in_use().len(), 26);
    assert_eq!(game.find_unused_identity(), None);

    let before = game.snapshot();
    assert_eq!(game.add_card_pair(), None);
    assert_eq!(game.card_count(), 52);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_thirteenth_pair_on_small_alphabet_is_noop() {
    // 14 identities: A and B dealt, 12 more draws exhaust the pool
    let config = GameConfig::new().with_alphabet("ABCDEFGHIJKLMN").with_seed(25);
    let mut game = MatchingGame::with_config(&config).unwrap();

    for _ in 0..12 {
        assert!(game.add_card_pair().is_some());
    }
    assert_eq!(game.card_count(), 28);
    assert_eq!(game.add_card_pair(), None);
    assert_eq!(game.card_count(), 28);
    assert_invariants(&game);
}

#[test]
fn test_growth_preserves_progress() {
    let mut game = MatchingGame::with_seed(26);
    play_correct_pair(&mut game);

    game.add_card_pair();
    game.add_card_pair();

    assert_eq!(game.card_count(), 8);
    assert_eq!(game.guess_count(), 1);
    assert_eq!(game.match_count(), 1);
    assert_eq!(game.matched_cards().len(), 2);
    assert_eq!(
        game.unmatched_locations().iter().map(|l| l.raw()).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );
    assert_invariants(&game);
}

#[test]
fn test_remove_until_empty() {
    let mut game = MatchingGame::with_seed(27);
    game.add_card_pair();
    let original = game.unmatched_cards().len();

    loop {
        let Some(location) = game.unmatched_cards().front().map(|c| c.location()) else {
            break;
        };
        game.remove_from_board(location).unwrap();
        assert_eq!(
            game.unmatched_cards().len() + game.matched_cards().len(),
            game.card_count()
        );
    }

    assert!(game.unmatched_cards().is_empty());
    assert_eq!(game.matched_cards().len(), original);
}

#[test]
fn test_probing_invalid_locations() {
    let mut game = MatchingGame::with_seed(28);
    let before = game.snapshot();

    assert!(!game.guess_card(Location(0)));
    assert!(!game.guess_card(Location(99)));
    assert!(game.find_card(Location(99)).is_none());
    assert!(matches!(
        game.is_match(Location(1), Location(99)),
        Err(MatchError::NotFound { .. })
    ));
    assert!(matches!(
        game.remove_from_board(Location(99)),
        Err(MatchError::NotFound { .. })
    ));

    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_entropy_boards_differ() {
    // 52-card boards from independent entropy seeds are practically never equal
    let mut a = MatchingGame::new();
    let mut b = MatchingGame::new();
    for _ in 0..24 {
        a.add_card_pair();
        b.add_card_pair();
    }
    assert_ne!(a.unmatched_cards(), b.unmatched_cards());
}
