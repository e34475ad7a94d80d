//! Mark balance: X has placed as many marks as O, or one more.

use super::Invariant;
use crate::{Board, Mark};

/// Counts the cells holding `mark`.
pub(crate) fn count(board: &Board, mark: Mark) -> usize {
    board
        .grid()
        .iter()
        .filter(|cell| cell.mark() == Some(mark))
        .count()
}

/// Invariant: count(X) - count(O) is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = count(board, Mark::X);
        let o = count(board, Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has placed as many marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_empty_board_holds() {
        assert!(MarkBalanceInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_after_first_move_holds() {
        let mut board = Board::new();
        board.attempt_move(0, 0).unwrap();
        assert!(MarkBalanceInvariant::holds(&board));
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut board = Board::new();
        board.force_cell(Position::Center, Cell::Occupied(Mark::O));
        assert!(!MarkBalanceInvariant::holds(&board));
    }
}
