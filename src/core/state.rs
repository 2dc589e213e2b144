//! Game state: the single source of truth for one game.
//!
//! ## Zones
//!
//! - Stock with its browse cursor
//! - Seven tableau piles
//! - Four foundation piles (a pile's suit is set by whichever ace starts it)
//!
//! ## Snapshots
//!
//! All zones use `im` persistent vectors, so `clone()` is O(1). Observers get
//! clones; only the transition engine mutates state, and it does so on a
//! working copy that replaces the old state in one assignment.

use anyhow::{bail, ensure, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::config::{DECK_SIZE, FOUNDATION_PILES, TABLEAU_PILES};
use crate::deck::Deal;
use crate::rules::placement::suits_stackable;
use crate::rules::victory::is_won;
use crate::zones::{Pile, Stock};

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) stock: Stock,
    pub(crate) tableau: [Pile; TABLEAU_PILES],
    pub(crate) foundations: [Pile; FOUNDATION_PILES],
    pub(crate) moves: u32,
    pub(crate) finished: bool,
}

impl GameState {
    /// Create the initial state from a fresh deal.
    #[must_use]
    pub fn from_deal(deal: Deal) -> Self {
        Self {
            stock: deal.stock,
            tableau: deal.tableau,
            foundations: Default::default(),
            moves: 0,
            finished: false,
        }
    }

    /// Create a state from an explicit layout.
    ///
    /// Used for puzzles and tests. `finished` is derived from the layout and
    /// move count. Fails if the layout breaks a state invariant.
    pub fn from_layout(
        stock: Stock,
        tableau: [Pile; TABLEAU_PILES],
        foundations: [Pile; FOUNDATION_PILES],
        moves: u32,
    ) -> Result<Self> {
        let mut state = Self {
            stock,
            tableau,
            foundations,
            moves,
            finished: false,
        };
        state.finished = is_won(&state);
        state.check_invariants()?;
        Ok(state)
    }

    // === Read access ===

    #[must_use]
    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    /// All tableau piles, left to right.
    #[must_use]
    pub fn tableau(&self) -> &[Pile; TABLEAU_PILES] {
        &self.tableau
    }

    /// All foundation piles, left to right.
    #[must_use]
    pub fn foundations(&self) -> &[Pile; FOUNDATION_PILES] {
        &self.foundations
    }

    /// Accepted moves so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Has the game been won?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Iterate over every card in every zone.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.tableau.iter().flat_map(Pile::iter))
            .chain(self.foundations.iter().flat_map(Pile::iter))
    }

    /// Cards already built onto foundations.
    #[must_use]
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    // === Invariants ===

    /// Verify the state invariants.
    ///
    /// - Exactly 52 cards, each `(suit, rank)` once
    /// - Every foundation pile is a same-suit build from the ace, step 1
    /// - Every non-empty tableau pile has a face-up top card, and its face-up
    ///   cards form one descending run of alternating colors
    /// - The stock cursor is in range
    /// - `finished` holds exactly when the layout is won
    pub fn check_invariants(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        let mut count = 0usize;
        for card in self.all_cards() {
            count += 1;
            if !seen.insert(card.id()) {
                bail!("duplicate card {}{}", card.rank, card.suit);
            }
        }
        ensure!(count == DECK_SIZE, "expected {DECK_SIZE} cards, found {count}");

        for (index, pile) in self.foundations.iter().enumerate() {
            let mut expected_rank = 1u8;
            let suit = pile.get(0).map(|card| card.suit);
            for card in pile {
                ensure!(
                    Some(card.suit) == suit && card.rank.value() == expected_rank,
                    "foundation {index} is not an ascending same-suit build at {}{}",
                    card.rank,
                    card.suit
                );
                expected_rank += 1;
            }
        }

        for (index, pile) in self.tableau.iter().enumerate() {
            if let Some(top) = pile.top() {
                ensure!(top.visible, "tableau {index} has a face-down top card");
            }
            for (lower, upper) in pile.iter().zip(pile.iter().skip(1)) {
                if !lower.visible {
                    continue;
                }
                ensure!(
                    upper.visible,
                    "tableau {index} has a face-down card above a face-up one"
                );
                ensure!(
                    upper.rank.succ() == Some(lower.rank) && suits_stackable(lower.suit, upper.suit),
                    "tableau {index} has a broken run at {}{} on {}{}",
                    upper.rank,
                    upper.suit,
                    lower.rank,
                    lower.suit
                );
            }
        }

        if let Some(cursor) = self.stock.cursor() {
            ensure!(cursor < self.stock.len(), "stock cursor {cursor} out of range");
        }

        ensure!(
            self.finished == is_won(self),
            "finished flag is {} but the layout says {} after {} moves",
            self.finished,
            if is_won(self) { "won" } else { "not won" },
            self.moves
        );

        Ok(())
    }
}
