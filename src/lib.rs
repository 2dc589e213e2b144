//! # rust-klondike
//!
//! Rule engine and state transitions for Klondike solitaire: seven tableau
//! piles, four foundations, and a stock browsed one card at a time.
//!
//! ## Design Principles
//!
//! 1. **One owner**: A `Session` owns the live `GameState`. Presentation code
//!    reads snapshots and submits move requests; it never touches piles.
//!
//! 2. **Atomic transitions**: A move is resolved on a working copy and
//!    committed in one assignment. Rejected moves change nothing and do not
//!    count.
//!
//! 3. **Named rules**: Suit stackability and placement checks are pure
//!    predicates in `rules::placement`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles are `im` vectors, so snapshots
//!   and working copies are O(1).
//!
//! - **Deterministic Deals**: The shuffle is Fisher–Yates over a seeded
//!   ChaCha8 stream; the same seed gives the same game.
//!
//! ## Modules
//!
//! - `core`: Cards, RNG, configuration, moves, game state
//! - `zones`: Stock and piles
//! - `deck`: Deck construction, shuffle, initial deal
//! - `rules`: Placement rules, win detection, `RulesEngine` trait
//! - `engine`: Transition engine and session
//!
//! ```
//! use rust_klondike::{GameConfig, Move, Session};
//!
//! let mut session = Session::new(GameConfig::default().with_seed(42));
//! for mv in session.legal_moves() {
//!     if mv != Move::AdvanceStock {
//!         assert!(session.apply(mv).is_accepted());
//!         break;
//!     }
//! }
//! ```

pub mod core;
pub mod zones;
pub mod deck;
pub mod rules;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Rank, Suit, ALL_SUITS,
    GameConfig, DECK_SIZE, FOUNDATION_PILES, TABLEAU_PILES,
    GameRng, Shuffler,
    Move, MoveKind, MoveOutcome, MoveRecord, RejectReason,
    GameState,
};

pub use crate::zones::{Pile, Stock};

pub use crate::deck::{build_shuffled_deck, canonical_deck, deal_initial_layout, Deal};

pub use crate::rules::{find_foundation_target, find_tableau_target, GameResult, RulesEngine};

pub use crate::engine::{KlondikeRules, Session};
