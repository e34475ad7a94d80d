//! Core domain types: marks and cells.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two players' symbols.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// First mark (moves first), displayed as `X`.
    #[display("X")]
    X,
    /// Second mark, displayed as `O`.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single board position's contents.
///
/// A cell is written at most once per game and only cleared by [`Cell::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Places `mark` if the cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if a mark is already present. The cell is
    /// left unchanged in that case.
    #[instrument(skip(self), fields(current = ?self))]
    pub fn set(&mut self, mark: Mark) -> Result<(), IllegalMove> {
        match self {
            Cell::Empty => {
                *self = Cell::Occupied(mark);
                Ok(())
            }
            Cell::Occupied(existing) => Err(IllegalMove {
                existing: *existing,
            }),
        }
    }

    /// Returns the current contents.
    pub fn get(&self) -> Cell {
        *self
    }

    /// Returns the mark, if any.
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(*mark),
        }
    }

    /// Returns true if nothing has been placed.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Clears the cell.
    pub fn reset(&mut self) {
        *self = Cell::Empty;
    }
}

/// Attempt to overwrite an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Cell already holds {}", existing)]
pub struct IllegalMove {
    /// The mark already in the cell.
    pub existing: Mark,
}
