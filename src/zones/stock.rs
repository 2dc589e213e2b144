//! The stock: undealt cards browsed with a cursor.
//!
//! The cursor is `None` when no card is revealed, otherwise the index of the
//! active (playable) card. Advancing past the last card wraps back to `None`.
//! Cards at indices below the cursor have already been browsed and are shown
//! in the fan, but only the card at the cursor can be played.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;

/// Stock cards plus the browse cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    cards: Vector<Card>,
    cursor: Option<usize>,
}

impl Stock {
    /// Create a stock with the cursor reset.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            cursor: None,
        }
    }

    /// Create a stock with an explicit cursor.
    ///
    /// Returns `None` if the cursor is out of range.
    #[must_use]
    pub fn with_cursor(cards: impl IntoIterator<Item = Card>, cursor: Option<usize>) -> Option<Self> {
        let stock = Self {
            cards: cards.into_iter().collect(),
            cursor,
        };
        match cursor {
            Some(index) if index >= stock.cards.len() => None,
            _ => Some(stock),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Iterate all stock cards, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// The card at the cursor, if one is exposed.
    #[must_use]
    pub fn exposed(&self) -> Option<&Card> {
        self.cursor.and_then(|index| self.cards.get(index))
    }

    /// Up to `width` browsed cards ending at the cursor, oldest first,
    /// all face-up. The last element is the playable card.
    #[must_use]
    pub fn fan(&self, width: usize) -> SmallVec<[Card; 3]> {
        let Some(cursor) = self.cursor else {
            return SmallVec::new();
        };
        let start = (cursor + 1).saturating_sub(width);
        (start..=cursor)
            .filter_map(|index| self.cards.get(index))
            .map(|card| card.with_visible(true))
            .collect()
    }

    /// Move the cursor forward one card, wrapping to `None` past the end.
    pub(crate) fn advance(&mut self) {
        self.cursor = match self.cursor {
            None if !self.cards.is_empty() => Some(0),
            Some(index) if index + 1 < self.cards.len() => Some(index + 1),
            _ => None,
        };
    }

    /// Remove the exposed card.
    ///
    /// The cursor steps back one so the previously browsed card becomes
    /// playable. At index 0 it stays on the card that slid into place, or
    /// resets when the stock runs out.
    pub(crate) fn take_exposed(&mut self) -> Option<Card> {
        let index = self.cursor?;
        if index >= self.cards.len() {
            return None;
        }
        let card = self.cards.remove(index);
        self.cursor = if index > 0 {
            Some(index - 1)
        } else if self.cards.is_empty() {
            None
        } else {
            Some(0)
        };
        Some(card)
    }
}
