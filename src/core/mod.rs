//! Core types: cards, RNG, configuration, moves, and game state.

pub mod action;
pub mod card;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{Move, MoveKind, MoveOutcome, MoveRecord, RejectReason};
pub use card::{Card, Color, Rank, Suit, ALL_SUITS};
pub use config::{GameConfig, DECK_SIZE, FOUNDATION_PILES, INITIAL_STOCK_SIZE, TABLEAU_PILES};
pub use rng::{GameRng, Shuffler};
pub use state::GameState;
