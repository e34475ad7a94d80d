//! Draw detection logic for tic-tac-toe.

use super::win::{Grid, check_winner};
use crate::types::Cell;
use tracing::instrument;

/// Checks if every cell holds a mark.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.iter().all(|cell| *cell != Cell::Empty)
}

/// A full board with no complete line.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && check_winner(grid).is_none()
}
