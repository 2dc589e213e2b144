//! Deck builder and initial deal tests.
//!
//! These tests verify that every shuffle is a permutation of the canonical
//! deck and that every deal has the standard Klondike shape.

use proptest::prelude::*;
use rust_klondike::core::{Card, GameRng, Shuffler, INITIAL_STOCK_SIZE, TABLEAU_PILES};
use rust_klondike::deck::{build_shuffled_deck, canonical_deck, deal_initial_layout};
use rust_klondike::{GameConfig, GameState, Session};

fn sorted_ids(cards: &[Card]) -> Vec<(rust_klondike::Suit, rust_klondike::Rank)> {
    let mut ids: Vec<_> = cards.iter().map(Card::id).collect();
    ids.sort();
    ids
}

// =============================================================================
// Shuffle
// =============================================================================

proptest! {
    /// Every seed yields a permutation of the 52-card set.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let deck = build_shuffled_deck(&mut GameRng::new(seed));
        prop_assert_eq!(deck.len(), 52);
        prop_assert_eq!(sorted_ids(&deck), sorted_ids(&canonical_deck()));
        prop_assert!(deck.iter().all(|card| !card.visible));
    }

    /// The shuffle works on any slice length.
    #[test]
    fn prop_shuffle_preserves_elements(seed in any::<u64>(), mut items in proptest::collection::vec(any::<u16>(), 0..64)) {
        let mut expected = items.clone();
        GameRng::new(seed).shuffle(&mut items);
        items.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(items, expected);
    }

    /// Every deal has the standard shape.
    #[test]
    fn prop_deal_shape(seed in any::<u64>()) {
        let deal = deal_initial_layout(build_shuffled_deck(&mut GameRng::new(seed)));

        for (index, pile) in deal.tableau.iter().enumerate() {
            prop_assert_eq!(pile.len(), index + 1);
            let visible: Vec<_> = pile.iter().map(|card| card.visible).collect();
            let mut expected = vec![false; index];
            expected.push(true);
            prop_assert_eq!(visible, expected);
        }
        prop_assert_eq!(deal.stock.len(), INITIAL_STOCK_SIZE);
        prop_assert_eq!(deal.stock.cursor(), None);

        let state = GameState::from_deal(deal);
        prop_assert!(state.check_invariants().is_ok());
    }
}

/// The ace of clubs should land in every slot about equally often.
#[test]
fn test_shuffle_spreads_positions() {
    let mut rng = GameRng::new(2024);
    let mut first_position_counts = [0u32; 52];
    let trials = 5_200;
    let ace_of_clubs = canonical_deck()[0].id();

    for _ in 0..trials {
        let mut deck = canonical_deck();
        rng.shuffle(&mut deck);
        let position = deck
            .iter()
            .position(|card| card.id() == ace_of_clubs)
            .unwrap();
        first_position_counts[position] += 1;
    }

    // Expected 100 per slot; allow generous slack.
    for (position, &count) in first_position_counts.iter().enumerate() {
        assert!((40..=180).contains(&count), "slot {position} hit {count} times");
    }
}

// =============================================================================
// Session deals
// =============================================================================

/// A session deals a fresh standard layout.
#[test]
fn test_session_initial_state() {
    let session = Session::new(GameConfig::default().with_seed(31));
    let state = session.state();

    assert_eq!(state.tableau().len(), TABLEAU_PILES);
    for (index, pile) in state.tableau().iter().enumerate() {
        assert_eq!(pile.len(), index + 1);
        assert!(pile.top().unwrap().visible);
    }
    assert_eq!(state.stock().len(), 24);
    assert_eq!(state.stock().cursor(), None);
    assert!(state.foundations().iter().all(|pile| pile.is_empty()));
    assert_eq!(state.moves(), 0);
    assert!(!state.is_finished());
}

/// Unseeded sessions still report a replayable seed.
#[test]
fn test_unseeded_session_is_replayable() {
    let session = Session::new(GameConfig::default());
    let seed = session.seed().expect("dealt sessions have a seed");

    let replay = Session::new(GameConfig::default().with_seed(seed));
    assert_eq!(session.state(), replay.state());
}
