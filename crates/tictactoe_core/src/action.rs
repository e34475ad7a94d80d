//! Move outcomes and rejections.
//!
//! A move either produces a [`MoveResult`] describing what the presenter
//! should show, or a [`MoveError`] the input layer can ignore. Rejections
//! never change the board.

use crate::geometry::LineGeometry;
use crate::line::Line;
use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Placement {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// What an accepted move produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MoveResult {
    /// No line completed and cells remain; `next` moves now.
    Continue {
        /// The accepted placement.
        placed: Placement,
        /// Mark to move next.
        next: Mark,
    },
    /// The placement completed a line.
    Winner {
        /// The accepted placement.
        placed: Placement,
        /// Winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
        /// Strike-through geometry for the completed line.
        geometry: LineGeometry,
    },
    /// The placement filled the board without completing a line.
    Draw {
        /// The accepted placement.
        placed: Placement,
    },
}

impl MoveResult {
    /// The placement every result carries.
    pub fn placed(&self) -> Placement {
        match self {
            MoveResult::Continue { placed, .. }
            | MoveResult::Winner { placed, .. }
            | MoveResult::Draw { placed } => *placed,
        }
    }

    /// Returns true if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveResult::Continue { .. })
    }

    /// Winning mark, if the move won.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            MoveResult::Winner { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Observable phase of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the given mark to move.
    AwaitingMove(Mark),
    /// A line was completed by the given mark.
    Won(Mark),
    /// The board filled with no line.
    Drawn,
}

impl GameState {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::AwaitingMove(_))
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::AwaitingMove(mark) => write!(f, "Player {} to move", mark),
            GameState::Won(mark) => write!(f, "Player {} wins", mark),
            GameState::Drawn => write!(f, "Draw"),
        }
    }
}

/// Reason a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside `0..=2`.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// A postcondition failed after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
