//! Rules engine trait.
//!
//! A rules engine defines:
//! - How a move request changes state (or why it is rejected)
//! - Which requests are worth trying in a given state
//! - When the game is over

use crate::core::action::{Move, MoveOutcome};
use crate::core::state::GameState;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// All tableau piles were cleared.
    Won { moves: u32 },
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_move`: Must be atomic. A rejected move leaves `state` untouched
///   and does not count as a move.
/// - `candidate_moves`: May include requests that would be rejected;
///   `legal_moves` filters them.
/// - `is_terminal`: Return `None` while the game continues
pub trait RulesEngine {
    /// Validate and apply a move request.
    fn apply_move(&self, state: &mut GameState, mv: Move) -> MoveOutcome;

    /// Every request that could possibly be accepted in `state`.
    fn candidate_moves(&self, state: &GameState) -> Vec<Move>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate the requests that would be accepted.
    ///
    /// Default implementation dry-runs each candidate on a snapshot, which
    /// is cheap because state clones are O(1).
    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        self.candidate_moves(state)
            .into_iter()
            .filter(|&mv| {
                let mut scratch = state.clone();
                self.apply_move(&mut scratch, mv).is_accepted()
            })
            .collect()
    }
}
