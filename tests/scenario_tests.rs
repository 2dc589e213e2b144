//! End-to-end game scenarios.
//!
//! These tests drive a `Session` the way a presentation layer would and
//! compare the resulting snapshots against literal expected layouts.

use rust_klondike::core::{Card, GameState, Shuffler, FOUNDATION_PILES, TABLEAU_PILES};
use rust_klondike::deck::{build_shuffled_deck, deal_initial_layout};
use rust_klondike::{
    GameConfig, GameResult, Move, MoveKind, MoveOutcome, Pile, Rank, RejectReason, Session, Stock, Suit,
    ALL_SUITS,
};

/// Leaves the deck in canonical order: rank by rank from the aces, each
/// rank as clubs, diamonds, hearts, spades.
struct FixedOrder;

impl Shuffler for FixedOrder {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}

/// Face-up cards print as "Q♥", face-down ones as "(Q♥)".
fn show(card: &Card) -> String {
    if card.visible {
        card.to_string()
    } else {
        format!("({}{})", card.rank, card.suit)
    }
}

fn tableau_layout(state: &GameState) -> Vec<Vec<String>> {
    state
        .tableau()
        .iter()
        .map(|pile| pile.iter().map(show).collect())
        .collect()
}

fn foundation_layout(state: &GameState) -> Vec<Vec<String>> {
    state
        .foundations()
        .iter()
        .map(|pile| pile.iter().map(show).collect())
        .collect()
}

fn fixed_session() -> Session {
    let deal = deal_initial_layout(build_shuffled_deck(&mut FixedOrder));
    Session::from_state(GameConfig::default(), GameState::from_deal(deal)).unwrap()
}

fn strings(cards: &[&str]) -> Vec<String> {
    cards.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Scripted game
// =============================================================================

/// Deal from a fixed ordering and check the exact layout.
#[test]
fn test_fixed_deal_layout() {
    let session = fixed_session();
    let state = session.state();

    assert_eq!(
        tableau_layout(state),
        vec![
            strings(&["K♠"]),
            strings(&["(K♥)", "K♦"]),
            strings(&["(K♣)", "(Q♠)", "Q♥"]),
            strings(&["(Q♦)", "(Q♣)", "(J♠)", "J♥"]),
            strings(&["(J♦)", "(J♣)", "(10♠)", "(10♥)", "10♦"]),
            strings(&["(10♣)", "(9♠)", "(9♥)", "(9♦)", "(9♣)", "8♠"]),
            strings(&["(8♥)", "(8♦)", "(8♣)", "(7♠)", "(7♥)", "(7♦)", "7♣"]),
        ]
    );

    let stock: Vec<_> = state.stock().iter().map(show).collect();
    assert_eq!(stock.len(), 24);
    assert_eq!(stock[..5].to_vec(), strings(&["(A♣)", "(A♦)", "(A♥)", "(A♠)", "(2♣)"]));
    assert_eq!(stock[23], "(6♠)");
    assert_eq!(state.stock().cursor(), None);
}

/// Play five valid moves (plus rejected ones) and check the final snapshot.
#[test]
fn test_scripted_five_moves() {
    let mut session = fixed_session();

    // 1. Q♥ onto K♠.
    assert_eq!(
        session.play_tableau_card(2, 2).kind(),
        Some(MoveKind::TableauToTableau { from: 2, to: 0, count: 1 })
    );
    // 2. J♥ onto the Q♠ that was just turned up.
    assert_eq!(
        session.play_tableau_card(3, 3).kind(),
        Some(MoveKind::TableauToTableau { from: 3, to: 2, count: 1 })
    );
    // Rejected: 8♠ has no red 9 to go to. Not counted.
    assert_eq!(
        session.play_tableau_card(5, 5),
        MoveOutcome::Rejected(RejectReason::NoTarget)
    );
    // 3. The Q♠ J♥ run onto K♦.
    assert_eq!(
        session.play_tableau_card(2, 1).kind(),
        Some(MoveKind::TableauToTableau { from: 2, to: 1, count: 2 })
    );
    // 4. Flip A♣.
    assert_eq!(session.advance_stock().kind(), Some(MoveKind::AdvanceStock));
    // 5. A♣ to a foundation.
    assert_eq!(
        session.play_stock_card().kind(),
        Some(MoveKind::StockToFoundation { foundation: 0 })
    );
    // Rejected: foundation 1 is empty.
    assert_eq!(
        session.play_foundation_card(1),
        MoveOutcome::Rejected(RejectReason::EmptyFoundation)
    );

    let state = session.snapshot();
    assert_eq!(state.moves(), 5);
    assert!(!state.is_finished());
    assert_eq!(session.history().len(), 5);

    assert_eq!(
        tableau_layout(&state),
        vec![
            strings(&["K♠", "Q♥"]),
            strings(&["(K♥)", "K♦", "Q♠", "J♥"]),
            strings(&["K♣"]),
            strings(&["(Q♦)", "(Q♣)", "J♠"]),
            strings(&["(J♦)", "(J♣)", "(10♠)", "(10♥)", "10♦"]),
            strings(&["(10♣)", "(9♠)", "(9♥)", "(9♦)", "(9♣)", "8♠"]),
            strings(&["(8♥)", "(8♦)", "(8♣)", "(7♠)", "(7♥)", "(7♦)", "7♣"]),
        ]
    );
    assert_eq!(
        foundation_layout(&state),
        vec![strings(&["A♣"]), vec![], vec![], vec![]]
    );
    assert_eq!(state.stock().len(), 23);
    assert_eq!(state.stock().cursor(), Some(0));
    assert_eq!(state.stock().exposed().map(show), Some("(A♦)".to_string()));

    let fan: Vec<_> = session.stock_fan().iter().map(show).collect();
    assert_eq!(fan, strings(&["A♦"]));
    state.check_invariants().unwrap();
}

/// Browsing the whole stock wraps back to no card and every click counts.
#[test]
fn test_stock_browse_cycle() {
    let mut session = fixed_session();

    for expected in 0..24 {
        session.advance_stock();
        assert_eq!(session.state().stock().cursor(), Some(expected));
    }
    let fan: Vec<_> = session.stock_fan().iter().map(show).collect();
    assert_eq!(fan, strings(&["6♦", "6♥", "6♠"]));

    session.advance_stock();
    assert_eq!(session.state().stock().cursor(), None);
    assert!(session.stock_fan().is_empty());
    assert_eq!(session.state().moves(), 25);
}

// =============================================================================
// Victory
// =============================================================================

/// Foundations holding everything but the K♠, which sits alone in pile 3.
fn one_move_from_victory() -> GameState {
    let mut foundations: [Pile; FOUNDATION_PILES] = Default::default();
    for (pile, suit) in foundations.iter_mut().zip(ALL_SUITS) {
        *pile = Rank::all()
            .filter(|&rank| !(suit == Suit::Spades && rank == Rank::KING))
            .map(|rank| Card::face_up(suit, rank))
            .collect();
    }
    let mut tableau: [Pile; TABLEAU_PILES] = Default::default();
    tableau[3] = std::iter::once(Card::face_up(Suit::Spades, Rank::KING)).collect();

    GameState::from_layout(Stock::default(), tableau, foundations, 0).unwrap()
}

/// Clearing the last tableau card wins the game.
#[test]
fn test_last_card_wins() {
    let mut session = Session::from_state(GameConfig::default(), one_move_from_victory()).unwrap();
    assert!(!session.state().is_finished());
    assert_eq!(session.result(), None);

    let outcome = session.play_tableau_card(3, 0);
    assert_eq!(
        outcome.kind(),
        Some(MoveKind::TableauToFoundation { pile: 3, foundation: 3 })
    );

    let state = session.state();
    assert!(state.is_finished());
    assert_eq!(state.moves(), 1);
    assert_eq!(state.foundation_card_count(), 52);
    assert_eq!(session.result(), Some(GameResult::Won { moves: 1 }));
}

/// A won game ignores further moves until a new game starts.
#[test]
fn test_moves_suspended_after_win() {
    let mut session = Session::from_state(GameConfig::default().with_seed(77), one_move_from_victory()).unwrap();
    session.play_tableau_card(3, 0);

    assert_eq!(
        session.advance_stock(),
        MoveOutcome::Rejected(RejectReason::GameFinished)
    );
    assert_eq!(
        session.play_foundation_card(3),
        MoveOutcome::Rejected(RejectReason::GameFinished)
    );
    assert!(session.legal_moves().is_empty());
    assert_eq!(session.state().moves(), 1);

    session.new_game();
    assert!(!session.state().is_finished());
    assert_eq!(session.state().moves(), 0);
    assert!(session.legal_moves().contains(&Move::AdvanceStock));
}

/// Sending the king back down before finishing keeps the game going.
#[test]
fn test_unplaying_a_card_is_not_a_win() {
    let mut session = Session::from_state(GameConfig::default(), one_move_from_victory()).unwrap();

    // K♥ from the hearts foundation drops onto the first empty pile.
    assert_eq!(
        session.play_foundation_card(2).kind(),
        Some(MoveKind::FoundationToTableau { foundation: 2, pile: 0 })
    );
    assert!(!session.state().is_finished());
    assert_eq!(session.state().tableau()[0].top().map(show), Some("K♥".to_string()));
}
