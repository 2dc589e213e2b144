//! Game session: the interface the presentation layer talks to.
//!
//! A `Session` owns the one live `GameState`, the rules, the dealing RNG,
//! and the move history. Callers read snapshots and submit move requests;
//! they never get mutable access to piles.
//!
//! ```
//! use rust_klondike::{GameConfig, Session};
//!
//! let mut session = Session::new(GameConfig::default().with_seed(7));
//! assert_eq!(session.state().stock().len(), 24);
//!
//! let outcome = session.advance_stock();
//! assert!(outcome.is_accepted());
//! assert_eq!(session.state().moves(), 1);
//! assert_eq!(session.stock_fan().len(), 1);
//! ```

use anyhow::Result;
use im::Vector;
use log::info;
use smallvec::SmallVec;

use crate::core::action::{Move, MoveOutcome, MoveRecord};
use crate::core::card::Card;
use crate::core::config::GameConfig;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::deck::{build_shuffled_deck, deal_initial_layout};
use crate::rules::engine::{GameResult, RulesEngine};

use super::transition::KlondikeRules;

/// One player's ongoing sequence of games.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    rules: KlondikeRules,
    /// Source of seeds for later deals.
    rng: GameRng,
    /// Seed of the current deal, `None` for a prepared state.
    seed: Option<u64>,
    state: GameState,
    history: Vector<MoveRecord>,
}

impl Session {
    /// Start a session and deal the first game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy_seed(),
        };
        let seed = rng.seed();
        Self {
            state: deal(seed),
            config,
            rules: KlondikeRules::new(),
            rng,
            seed: Some(seed),
            history: Vector::new(),
        }
    }

    /// Start a session from a prepared state.
    ///
    /// Fails if `state` breaks a state invariant.
    pub fn from_state(config: GameConfig, state: GameState) -> Result<Self> {
        state.check_invariants()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy_seed(),
        };
        Ok(Self {
            config,
            rules: KlondikeRules::new(),
            rng,
            seed: None,
            state,
            history: Vector::new(),
        })
    }

    // === Observation ===

    /// Borrow the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// An owned snapshot of the current state (O(1)).
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the current deal.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Accepted moves of the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Browsed stock cards to display, oldest first; the last is playable.
    #[must_use]
    pub fn stock_fan(&self) -> SmallVec<[Card; 3]> {
        self.state.stock().fan(self.config.stock_fan)
    }

    /// Requests that would currently be accepted.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.rules.legal_moves(&self.state)
    }

    /// `Some` once the game is won.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    // === Commands ===

    /// Replace the current game with a fresh deal.
    pub fn new_game(&mut self) {
        let seed = self.rng.next_seed();
        self.state = deal(seed);
        self.seed = Some(seed);
        self.history = Vector::new();
    }

    /// Submit a move request.
    pub fn apply(&mut self, mv: Move) -> MoveOutcome {
        let outcome = self.rules.apply_move(&mut self.state, mv);
        if let MoveOutcome::Accepted(record) = outcome {
            self.history.push_back(record);
        }
        outcome
    }

    /// Flip the next stock card.
    pub fn advance_stock(&mut self) -> MoveOutcome {
        self.apply(Move::AdvanceStock)
    }

    /// Play the exposed stock card.
    pub fn play_stock_card(&mut self) -> MoveOutcome {
        self.apply(Move::PlayStock)
    }

    /// Move a foundation's top card back to the tableau.
    pub fn play_foundation_card(&mut self, pile: usize) -> MoveOutcome {
        self.apply(Move::PlayFoundation { pile })
    }

    /// Play the tableau card at `position` in `pile`.
    pub fn play_tableau_card(&mut self, pile: usize, position: usize) -> MoveOutcome {
        self.apply(Move::PlayTableau { pile, position })
    }
}

fn deal(seed: u64) -> GameState {
    info!("dealing new game with seed {seed}");
    let deck = build_shuffled_deck(&mut GameRng::new(seed));
    GameState::from_deal(deal_initial_layout(deck))
}
