//! Deck builder: the 52-card set, the shuffle, and the initial deal.
//!
//! ```
//! use rust_klondike::core::GameRng;
//! use rust_klondike::deck::{build_shuffled_deck, deal_initial_layout};
//!
//! let deck = build_shuffled_deck(&mut GameRng::new(42));
//! let deal = deal_initial_layout(deck);
//!
//! assert_eq!(deal.tableau[6].len(), 7);
//! assert_eq!(deal.stock.len(), 24);
//! ```

mod builder;

pub use builder::{assert_complete_deck, build_shuffled_deck, canonical_deck, deal_initial_layout, Deal};
