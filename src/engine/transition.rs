//! Transition engine: validates move requests and applies them atomically.
//!
//! Each request is resolved against a working copy of the state. On success
//! the move counter is bumped, victory is re-derived, and the copy replaces
//! the original. On failure the copy is dropped.

use log::{debug, info, trace};

use crate::core::action::{Move, MoveKind, MoveOutcome, MoveRecord, RejectReason};
use crate::core::card::Card;
use crate::core::state::GameState;
use crate::rules::engine::{GameResult, RulesEngine};
use crate::rules::placement::{find_foundation_target, find_tableau_target, find_tableau_target_except};
use crate::rules::victory::is_won;

/// Klondike rules: seven tableau piles, four foundations, one-card stock
/// browsing.
#[derive(Clone, Copy, Debug, Default)]
pub struct KlondikeRules;

impl KlondikeRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn resolve(&self, next: &mut GameState, mv: Move) -> Result<MoveKind, RejectReason> {
        match mv {
            Move::AdvanceStock => {
                next.stock.advance();
                Ok(MoveKind::AdvanceStock)
            }
            Move::PlayStock => play_stock(next),
            Move::PlayFoundation { pile } => play_foundation(next, pile),
            Move::PlayTableau { pile, position } => play_tableau(next, pile, position),
        }
    }
}

/// Exposed stock card: foundation first, then tableau.
fn play_stock(next: &mut GameState) -> Result<MoveKind, RejectReason> {
    let card = *next.stock.exposed().ok_or(RejectReason::NoExposedStockCard)?;

    if let Some(foundation) = find_foundation_target(&next.foundations, &card) {
        let card = take_stock_card(next)?;
        next.foundations[foundation].push(card.with_visible(true));
        return Ok(MoveKind::StockToFoundation { foundation });
    }

    let pile = find_tableau_target(&next.tableau, &card).ok_or(RejectReason::NoTarget)?;
    let card = take_stock_card(next)?;
    next.tableau[pile].push(card.with_visible(true));
    Ok(MoveKind::StockToTableau { pile })
}

fn take_stock_card(next: &mut GameState) -> Result<Card, RejectReason> {
    next.stock.take_exposed().ok_or(RejectReason::NoExposedStockCard)
}

/// Top foundation card back down to the tableau.
fn play_foundation(next: &mut GameState, foundation: usize) -> Result<MoveKind, RejectReason> {
    let source = next.foundations.get(foundation).ok_or(RejectReason::NoSuchPile)?;
    let card = *source.top().ok_or(RejectReason::EmptyFoundation)?;
    let pile = find_tableau_target(&next.tableau, &card).ok_or(RejectReason::NoTarget)?;

    next.foundations[foundation].pop();
    next.tableau[pile].push(card.with_visible(true));
    Ok(MoveKind::FoundationToTableau { foundation, pile })
}

/// A top card goes to a foundation if one accepts it. Otherwise the run
/// from `position` to the top moves to the first other tableau pile that
/// accepts its first card.
fn play_tableau(next: &mut GameState, pile: usize, position: usize) -> Result<MoveKind, RejectReason> {
    let source = next.tableau.get(pile).ok_or(RejectReason::NoSuchPile)?;
    let card = *source.get(position).ok_or(RejectReason::NoSuchCard)?;
    if !card.visible {
        return Err(RejectReason::FaceDown);
    }

    if source.is_top(position) {
        if let Some(foundation) = find_foundation_target(&next.foundations, &card) {
            next.tableau[pile].pop();
            next.tableau[pile].expose_top();
            next.foundations[foundation].push(card);
            return Ok(MoveKind::TableauToFoundation { pile, foundation });
        }
    }

    let to = find_tableau_target_except(&next.tableau, &card, Some(pile)).ok_or(RejectReason::NoTarget)?;
    let run = next.tableau[pile].split_off(position);
    let count = run.len();
    next.tableau[pile].expose_top();
    next.tableau[to].append(run);
    Ok(MoveKind::TableauToTableau { from: pile, to, count })
}

impl RulesEngine for KlondikeRules {
    fn apply_move(&self, state: &mut GameState, mv: Move) -> MoveOutcome {
        if state.finished {
            trace!("rejected {mv}: {}", RejectReason::GameFinished);
            return MoveOutcome::Rejected(RejectReason::GameFinished);
        }

        let mut next = state.clone();
        let kind = match self.resolve(&mut next, mv) {
            Ok(kind) => kind,
            Err(reason) => {
                trace!("rejected {mv}: {reason}");
                return MoveOutcome::Rejected(reason);
            }
        };

        next.moves += 1;
        // Only tableau moves can empty the tableau, but a prepared layout may
        // start out empty with no moves made.
        next.finished = is_won(&next);
        if next.finished {
            info!("game won in {} moves", next.moves);
        }
        debug_assert!(
            next.check_invariants().is_ok(),
            "{mv} broke a state invariant: {:?}",
            next.check_invariants()
        );

        let record = MoveRecord::new(next.moves, kind);
        debug!("move {}: {mv} -> {kind:?}", record.number);
        *state = next;
        MoveOutcome::Accepted(record)
    }

    fn candidate_moves(&self, state: &GameState) -> Vec<Move> {
        if state.finished {
            return Vec::new();
        }

        let mut moves = vec![Move::AdvanceStock];
        if state.stock.exposed().is_some() {
            moves.push(Move::PlayStock);
        }
        for (pile, foundation) in state.foundations.iter().enumerate() {
            if !foundation.is_empty() {
                moves.push(Move::PlayFoundation { pile });
            }
        }
        for (pile, cards) in state.tableau.iter().enumerate() {
            for (position, card) in cards.iter().enumerate() {
                if card.visible {
                    moves.push(Move::PlayTableau { pile, position });
                }
            }
        }
        moves
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.finished.then_some(GameResult::Won { moves: state.moves })
    }
}
