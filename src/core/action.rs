//! Move requests, resolved move kinds, and outcomes.
//!
//! A [`Move`] is what the presentation layer asks for: "play the card I
//! clicked". The engine resolves it to a [`MoveKind`] (which zones and piles
//! took part) or rejects it with a [`RejectReason`].
//!
//! ```
//! use rust_klondike::core::{Move, MoveKind, MoveOutcome, MoveRecord};
//!
//! let outcome = MoveOutcome::Accepted(MoveRecord::new(1, MoveKind::AdvanceStock));
//! assert!(outcome.is_accepted());
//! assert_eq!(Move::PlayTableau { pile: 2, position: 0 }.to_string(), "play tableau 2 @ 0");
//! ```

use serde::{Deserialize, Serialize};

/// A move request from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Flip the next stock card (or restart the browse cycle).
    AdvanceStock,
    /// Play the exposed stock card, foundation first, then tableau.
    PlayStock,
    /// Move the top card of a foundation pile back to the tableau.
    PlayFoundation { pile: usize },
    /// Play the card at `position` in tableau `pile`. A top card goes to a
    /// foundation when possible; otherwise the run starting at `position`
    /// goes to another tableau pile.
    PlayTableau { pile: usize, position: usize },
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::AdvanceStock => f.write_str("advance stock"),
            Move::PlayStock => f.write_str("play stock"),
            Move::PlayFoundation { pile } => write!(f, "play foundation {pile}"),
            Move::PlayTableau { pile, position } => write!(f, "play tableau {pile} @ {position}"),
        }
    }
}

/// What an accepted move actually did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    AdvanceStock,
    StockToFoundation { foundation: usize },
    StockToTableau { pile: usize },
    FoundationToTableau { foundation: usize, pile: usize },
    TableauToFoundation { pile: usize, foundation: usize },
    /// `count` cards moved as one run.
    TableauToTableau { from: usize, to: usize, count: usize },
}

/// Why a move was rejected. Rejection never changes state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The game is won; start a new game first.
    GameFinished,
    /// No stock card is exposed.
    NoExposedStockCard,
    /// Pile index out of range.
    NoSuchPile,
    /// The foundation pile is empty.
    EmptyFoundation,
    /// No card at that position in the pile.
    NoSuchCard,
    /// The selected card is face-down.
    FaceDown,
    /// No pile accepts the selected card.
    NoTarget,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            RejectReason::GameFinished => "game is finished",
            RejectReason::NoExposedStockCard => "no stock card exposed",
            RejectReason::NoSuchPile => "no such pile",
            RejectReason::EmptyFoundation => "foundation pile is empty",
            RejectReason::NoSuchCard => "no card at that position",
            RejectReason::FaceDown => "card is face-down",
            RejectReason::NoTarget => "no pile accepts the card",
        };
        f.write_str(text)
    }
}

/// A recorded accepted move.
///
/// `number` is the move counter value after the move (first move = 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub number: u32,
    pub kind: MoveKind,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(number: u32, kind: MoveKind) -> Self {
        Self { number, kind }
    }
}

/// Result of a move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// State mutated, counter incremented.
    Accepted(MoveRecord),
    /// State unchanged.
    Rejected(RejectReason),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }

    /// The resolved kind, if accepted.
    #[must_use]
    pub fn kind(&self) -> Option<MoveKind> {
        match self {
            MoveOutcome::Accepted(record) => Some(record.kind),
            MoveOutcome::Rejected(_) => None,
        }
    }

    /// The rejection reason, if rejected.
    #[must_use]
    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected(reason) => Some(*reason),
        }
    }
}
