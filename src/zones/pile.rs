//! An ordered pile of cards (tableau or foundation).
//!
//! Backed by an `im::Vector` so cloning a whole game state is O(1) and a
//! transition can work on a copy and commit it in one assignment.
//! The last element is the top of the pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::card::Card;

/// An ordered pile. Index 0 is the bottom, the last card is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// The card at `position` (0 = bottom).
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Is `position` the top of this pile?
    #[must_use]
    pub fn is_top(&self, position: usize) -> bool {
        !self.cards.is_empty() && position == self.cards.len() - 1
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Remove and return the run from `position` to the top, in order.
    pub(crate) fn split_off(&mut self, position: usize) -> Vector<Card> {
        self.cards.split_off(position)
    }

    /// Place a run on top, preserving its order.
    pub(crate) fn append(&mut self, run: Vector<Card>) {
        self.cards.append(run);
    }

    /// Turn the top card face-up. No-op on an empty pile.
    pub(crate) fn expose_top(&mut self) {
        if let Some(top) = self.cards.back_mut() {
            top.visible = true;
        }
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
