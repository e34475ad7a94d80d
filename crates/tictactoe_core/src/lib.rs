//! Engine-independent tic-tac-toe core.
//!
//! A [`Board`] owns nine [`Cell`]s, the side to move and the game phase.
//! Hosts map input to `(row, col)`, call [`Board::attempt_move`], and render
//! the returned [`MoveResult`]. [`Match`] wires a board to a [`Presenter`]
//! for hosts that prefer callbacks.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Line, LineIndex, Mark, MoveResult};
//!
//! let mut board = Board::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     board.attempt_move(row, col).unwrap();
//! }
//! match board.attempt_move(0, 2).unwrap() {
//!     MoveResult::Winner { mark, line, .. } => {
//!         assert_eq!(mark, Mark::X);
//!         assert_eq!(line, Line::Row(LineIndex::Zero));
//!     }
//!     other => panic!("expected a win, got {:?}", other),
//! }
//! assert!(board.is_game_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod geometry;
mod layout;
mod line;
mod position;
mod presenter;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{GameState, MoveError, MoveResult, Placement};
pub use board::Board;
pub use contracts::{CellIsEmpty, Contract, GameInProgress, MoveContract};
pub use geometry::LineGeometry;
pub use layout::{Layout, LayoutError};
pub use line::{Line, LineIndex};
pub use position::{Position, SIZE};
pub use presenter::{Match, Presenter, status_message};
pub use types::{Cell, IllegalMove, Mark};
