//! Terminal consistency: the phase agrees with the grid.

use super::Invariant;
use crate::rules;
use crate::{Board, GameState};

/// Invariant: `Won(m)` iff a line is complete with `m`, `Drawn` iff the grid
/// is full without a line, and the recorded winning line matches.
pub struct TerminalConsistentInvariant;

impl Invariant<Board> for TerminalConsistentInvariant {
    fn holds(board: &Board) -> bool {
        let found = rules::winning_line(board.grid());
        match board.state() {
            GameState::Won(mark) => {
                found.map(|(winner, _)| winner) == Some(mark)
                    && board.winning_line() == found.map(|(_, line)| line)
            }
            GameState::Drawn => rules::is_draw(board.grid()) && board.winning_line().is_none(),
            GameState::AwaitingMove(_) => {
                found.is_none()
                    && !rules::is_full(board.grid())
                    && board.winning_line().is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Game phase matches the lines on the board"
    }
}
