//! Deck construction, shuffling, and the initial deal.

use crate::core::card::{Card, Rank, ALL_SUITS};
use crate::core::config::{DECK_SIZE, TABLEAU_PILES};
use crate::core::rng::Shuffler;
use crate::zones::{Pile, Stock};
use rustc_hash::FxHashSet;

/// The result of dealing a deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub tableau: [Pile; TABLEAU_PILES],
    pub stock: Stock,
}

/// All 52 cards, face-down, rank by rank from ace to king, each rank in
/// suit order (clubs, diamonds, hearts, spades): A♣ A♦ A♥ A♠ 2♣ ...
#[must_use]
pub fn canonical_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::all() {
        for suit in ALL_SUITS {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Build the canonical deck and shuffle it.
#[must_use]
pub fn build_shuffled_deck(shuffler: &mut impl Shuffler) -> Vec<Card> {
    let mut deck = canonical_deck();
    shuffler.shuffle(&mut deck);
    assert_complete_deck(&deck);
    deck
}

/// Panic unless `deck` holds each of the 52 cards exactly once.
///
/// A failure here is a deck builder defect, never a user error.
pub fn assert_complete_deck(deck: &[Card]) {
    assert_eq!(deck.len(), DECK_SIZE, "deck must hold {DECK_SIZE} cards");
    let unique: FxHashSet<_> = deck.iter().map(Card::id).collect();
    assert_eq!(unique.len(), DECK_SIZE, "deck holds duplicate cards");
}

/// Deal the tableau from the end of `deck`.
///
/// Pile `i` gets `i + 1` cards and only its last card is turned face-up.
/// What remains becomes the face-down stock with the cursor reset.
///
/// Panics if `deck` is not a complete 52-card deck.
#[must_use]
pub fn deal_initial_layout(mut deck: Vec<Card>) -> Deal {
    assert_complete_deck(&deck);

    let mut tableau: [Pile; TABLEAU_PILES] = Default::default();
    for (index, pile) in tableau.iter_mut().enumerate() {
        for dealt in 0..=index {
            let card = deck.pop().expect("complete deck covers the tableau");
            pile.push(card.with_visible(dealt == index));
        }
    }

    let stock = Stock::new(deck.into_iter().map(|card| card.with_visible(false)));
    Deal { tableau, stock }
}
