//! Game rules for tic-tac-toe.
//!
//! Pure functions over a grid of cells, kept apart from the board's turn
//! bookkeeping so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};
