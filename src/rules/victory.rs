//! Win detection.
//!
//! The game is won when every tableau pile is empty and at least one move
//! has been made. Foundation completeness is not checked.

use crate::core::state::GameState;
use crate::zones::Pile;

/// Is `state` a won position?
#[must_use]
pub fn is_won(state: &GameState) -> bool {
    state.moves > 0 && state.tableau.iter().all(Pile::is_empty)
}
