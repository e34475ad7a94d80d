//! Named board positions and row/column addressing.

use crate::action::MoveError;
use crate::layout::Layout;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board side length.
pub const SIZE: usize = 3;

/// A position on the board.
///
/// Rows count from the top (0) to the bottom (2), columns from the
/// left (0) to the right (2). Indices are row-major.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row, 0 = top.
    pub fn row(self) -> usize {
        self.to_index() / SIZE
    }

    /// Column, 0 = left.
    pub fn col(self) -> usize {
        self.to_index() % SIZE
    }

    /// Resolves a caller-supplied `(row, col)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either coordinate is outside `0..=2`.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self::ALL[row * SIZE + col])
    }

    /// World-space centre of this tile under `layout`.
    ///
    /// The centre tile sits at the origin, row 0 at positive y.
    pub fn world_center(self, layout: &Layout) -> (f32, f32) {
        let offset = *layout.tile_offset();
        let x = (self.col() as f32 - 1.0) * offset;
        let y = (1.0 - self.row() as f32) * offset;
        (x, y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
