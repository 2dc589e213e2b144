//! Placement rules: where a card may land.
//!
//! All functions here are pure. The finders scan piles left to right and
//! return the first eligible pile. The stock is never a target.

use crate::core::card::{Card, Rank, Suit};
use crate::zones::Pile;

/// Can a card of suit `lower` sit on a card of suit `upper` in the tableau?
///
/// True only for a black/red pair: one of clubs or spades, the other
/// diamonds or hearts.
#[must_use]
pub fn suits_stackable(upper: Suit, lower: Suit) -> bool {
    upper.color() != lower.color()
}

/// Can `card` be built onto foundation `pile`?
///
/// An empty pile takes any ace; otherwise the top must be the same suit and
/// one rank lower.
#[must_use]
pub fn fits_foundation(pile: &Pile, card: &Card) -> bool {
    match pile.top() {
        None => card.rank == Rank::ACE,
        Some(top) => top.suit == card.suit && top.rank.succ() == Some(card.rank),
    }
}

/// Can `card` be placed onto tableau `pile`?
///
/// An empty pile takes any king; otherwise the top must be one rank higher
/// and of the opposite color.
#[must_use]
pub fn fits_tableau(pile: &Pile, card: &Card) -> bool {
    match pile.top() {
        None => card.rank == Rank::KING,
        Some(top) => card.rank.succ() == Some(top.rank) && suits_stackable(top.suit, card.suit),
    }
}

/// First foundation pile that accepts `card`.
#[must_use]
pub fn find_foundation_target(foundations: &[Pile], card: &Card) -> Option<usize> {
    foundations.iter().position(|pile| fits_foundation(pile, card))
}

/// First tableau pile that accepts `card`.
#[must_use]
pub fn find_tableau_target(tableau: &[Pile], card: &Card) -> Option<usize> {
    find_tableau_target_except(tableau, card, None)
}

/// First tableau pile other than `source` that accepts `card`.
#[must_use]
pub fn find_tableau_target_except(tableau: &[Pile], card: &Card, source: Option<usize>) -> Option<usize> {
    tableau
        .iter()
        .enumerate()
        .filter(|&(index, _)| Some(index) != source)
        .find(|(_, pile)| fits_tableau(pile, card))
        .map(|(index, _)| index)
}
