//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} move {Q}.

use crate::action::MoveError;
use crate::board::Board;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::position::Position;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not ended.
pub struct GameInProgress;

impl GameInProgress {
    /// Fails with [`MoveError::GameAlreadyOver`] once the game is won or drawn.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        if board.is_game_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] if `position` holds a mark.
    #[instrument(skip(board))]
    pub fn check(position: Position, board: &Board) -> Result<(), MoveError> {
        if board.cell(position).is_empty() {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Contract for placing the current mark.
///
/// Preconditions:
/// - Game still in progress
/// - Target cell empty
///
/// Postconditions:
/// - Exactly one more cell is occupied
/// - All board invariants hold
pub struct MoveContract;

impl Contract<Board, Position> for MoveContract {
    fn pre(board: &Board, position: &Position) -> Result<(), MoveError> {
        GameInProgress::check(board)?;
        CellIsEmpty::check(*position, board)?;
        Ok(())
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        let filled = |board: &Board| board.grid().iter().filter(|c| !c.is_empty()).count();
        if filled(after) != filled(before) + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} occupied cells, found {}",
                filled(before) + 1,
                filled(after)
            )));
        }

        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
