//! Win detection logic for tic-tac-toe.

use crate::line::Line;
use crate::types::{Cell, Mark};
use crate::Position;
use tracing::instrument;

/// Grid of cells in row-major order.
pub type Grid = [Cell; 9];

/// Finds the first complete line in evaluation order.
///
/// Columns are checked first, then rows, then the main diagonal and the
/// anti-diagonal. A line is complete when all three cells hold the same mark.
#[instrument(skip(grid))]
pub fn winning_line(grid: &Grid) -> Option<(Mark, Line)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.cells().map(|pos: Position| grid[pos.to_index()]);
        match a {
            Cell::Occupied(mark) if a == b && a == c => Some((mark, line)),
            _ => None,
        }
    })
}

/// Returns the winning mark, if any.
#[instrument(skip(grid))]
pub fn check_winner(grid: &Grid) -> Option<Mark> {
    winning_line(grid).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineIndex;

    fn grid_with(marks: &[(Position, Mark)]) -> Grid {
        let mut grid = [Cell::Empty; 9];
        for (pos, mark) in marks {
            grid[pos.to_index()] = Cell::Occupied(*mark);
        }
        grid
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&[Cell::Empty; 9]), None);
    }

    #[test]
    fn test_winner_top_row() {
        let grid = grid_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(
            winning_line(&grid),
            Some((Mark::X, Line::Row(LineIndex::Zero)))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let grid = grid_with(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        assert_eq!(check_winner(&grid), Some(Mark::O));
        assert_eq!(winning_line(&grid), Some((Mark::O, Line::AntiDiagonal)));
    }

    #[test]
    fn test_mixed_line_not_a_win() {
        let grid = grid_with(&[
            (Position::TopLeft, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::BottomLeft, Mark::X),
        ]);
        assert_eq!(winning_line(&grid), None);
    }

    #[test]
    fn test_columns_take_priority_over_rows() {
        // X fills column 0 and row 0 at once.
        let grid = grid_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::BottomLeft, Mark::X),
        ]);
        assert_eq!(
            winning_line(&grid),
            Some((Mark::X, Line::Column(LineIndex::Zero)))
        );
    }
}
