//! Game configuration and layout constants.

use serde::{Deserialize, Serialize};

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Cards left in the stock after the initial deal (52 - 28).
pub const INITIAL_STOCK_SIZE: usize = DECK_SIZE - TABLEAU_PILES * (TABLEAU_PILES + 1) / 2;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the first deal. `None` picks a fresh seed.
    /// Later deals draw their seeds from the session RNG, so a fixed seed
    /// makes a whole sequence of games reproducible.
    pub seed: Option<u64>,

    /// How many browsed stock cards the fan view shows (active card included).
    pub stock_fan: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            stock_fan: 3,
        }
    }
}

impl GameConfig {
    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the stock fan width (minimum 1).
    #[must_use]
    pub fn with_stock_fan(mut self, fan: usize) -> Self {
        self.stock_fan = fan.max(1);
        self
    }
}
