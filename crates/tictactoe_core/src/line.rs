//! The eight lines a mark can complete.

use crate::position::{Position, SIZE};
use serde::{Deserialize, Serialize};

/// Index of a row or column. Row 0 is the top, column 0 the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineIndex {
    /// Top row or left column.
    Zero,
    /// Middle row or column.
    One,
    /// Bottom row or right column.
    Two,
}

impl LineIndex {
    /// Numeric index, 0-2.
    pub fn get(self) -> usize {
        self as usize
    }

    /// Creates an index from 0-2.
    pub fn from_usize(index: usize) -> Option<Self> {
        match index {
            0 => Some(LineIndex::Zero),
            1 => Some(LineIndex::One),
            2 => Some(LineIndex::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for LineIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A row, column or diagonal of three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Column, read top to bottom.
    Column(LineIndex),
    /// Row, read left to right.
    Row(LineIndex),
    /// (0,0), (1,1), (2,2).
    MainDiagonal,
    /// (0,2), (1,1), (2,0).
    AntiDiagonal,
}

impl Line {
    /// Every line, in evaluation order. The first complete one wins.
    pub const ALL: [Line; 8] = [
        Line::Column(LineIndex::Zero),
        Line::Column(LineIndex::One),
        Line::Column(LineIndex::Two),
        Line::Row(LineIndex::Zero),
        Line::Row(LineIndex::One),
        Line::Row(LineIndex::Two),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three positions on this line.
    pub fn cells(self) -> [Position; 3] {
        let at = |row: usize, col: usize| Position::ALL[row * SIZE + col];
        match self {
            Line::Column(c) => [at(0, c.get()), at(1, c.get()), at(2, c.get())],
            Line::Row(r) => [at(r.get(), 0), at(r.get(), 1), at(r.get(), 2)],
            Line::MainDiagonal => [at(0, 0), at(1, 1), at(2, 2)],
            Line::AntiDiagonal => [at(0, 2), at(1, 1), at(2, 0)],
        }
    }

    /// Returns true if `position` lies on this line.
    pub fn contains(self, position: Position) -> bool {
        self.cells().contains(&position)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Column(c) => write!(f, "column {}", c),
            Line::Row(r) => write!(f, "row {}", r),
            Line::MainDiagonal => write!(f, "main diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_cells_top_to_bottom() {
        assert_eq!(
            Line::Column(LineIndex::One).cells(),
            [Position::TopCenter, Position::Center, Position::BottomCenter]
        );
    }

    #[test]
    fn test_anti_diagonal_cells() {
        assert_eq!(
            Line::AntiDiagonal.cells(),
            [Position::TopRight, Position::Center, Position::BottomLeft]
        );
    }

    #[test]
    fn test_center_on_four_lines() {
        let count = Line::ALL
            .iter()
            .filter(|line| line.contains(Position::Center))
            .count();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_every_position_covered() {
        for pos in Position::ALL {
            assert!(Line::ALL.iter().any(|line| line.contains(pos)));
        }
    }

    #[test]
    fn test_index_bounds() {
        assert_eq!(LineIndex::from_usize(2), Some(LineIndex::Two));
        assert_eq!(LineIndex::from_usize(3), None);
        assert_eq!(Line::Row(LineIndex::Two).to_string(), "row 2");
    }

    #[test]
    fn test_out_of_range_index_not_deserialized() {
        assert!(serde_json::from_str::<Line>(r#"{"Row":42}"#).is_err());
        assert!(serde_json::from_str::<Line>(r#"{"Column":7}"#).is_err());
        let line: Line = serde_json::from_str(r#"{"Row":"Two"}"#).unwrap();
        assert_eq!(line, Line::Row(LineIndex::Two));
    }

    #[test]
    fn test_row_cells_match_positions() {
        for line in Line::ALL {
            if let Line::Row(r) = line {
                assert!(line.cells().iter().all(|pos| pos.row() == r.get()));
            }
            if let Line::Column(c) = line {
                assert!(line.cells().iter().all(|pos| pos.col() == c.get()));
            }
        }
    }
}
