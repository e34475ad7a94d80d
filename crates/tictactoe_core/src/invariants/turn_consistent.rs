//! Turn consistency: the side to move follows from the mark counts.

use super::Invariant;
use super::mark_balance::count;
use crate::{Board, GameState, Mark};

/// Invariant: while awaiting a move, X is to move iff both marks have been
/// placed equally often, and the state names the same mark as the turn.
pub struct TurnConsistentInvariant;

impl Invariant<Board> for TurnConsistentInvariant {
    fn holds(board: &Board) -> bool {
        match board.state() {
            GameState::AwaitingMove(mark) => {
                let expected = if count(board, Mark::X) == count(board, Mark::O) {
                    Mark::X
                } else {
                    Mark::O
                };
                mark == expected && board.current_turn() == expected
            }
            GameState::Won(_) | GameState::Drawn => true,
        }
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O, ..."
    }
}
