//! Boundary to the host that draws the board and reacts to input.
//!
//! The host maps clicks to `(row, col)`, calls [`Match::click`], and
//! receives notifications through its [`Presenter`]. A reset request is
//! honoured only while the game is over.

use crate::action::{MoveError, MoveResult, Placement};
use crate::board::Board;
use crate::geometry::LineGeometry;
use crate::line::Line;
use crate::types::Mark;
use tracing::{debug, instrument};

/// Receives what the host should show after each accepted move.
pub trait Presenter {
    /// Draw `placement`'s glyph and play its mark's sound.
    fn mark_placed(&mut self, placement: Placement);

    /// Show the winner and draw the strike-through.
    fn game_won(&mut self, mark: Mark, line: Line, geometry: LineGeometry);

    /// Show the draw message.
    fn game_drawn(&mut self);

    /// Clear glyphs, the strike-through, and the status text.
    fn board_reset(&mut self);
}

/// Status text for a result, `None` while play continues.
pub fn status_message(result: &MoveResult) -> Option<String> {
    match result {
        MoveResult::Continue { .. } => None,
        MoveResult::Winner { mark, .. } => Some(format!(
            "The winner is {}\nPress R to start a new game",
            mark
        )),
        MoveResult::Draw { .. } => Some("Draw\nPress R to start a new game".to_string()),
    }
}

/// A board wired to a presenter.
#[derive(Debug)]
pub struct Match<P> {
    board: Board,
    presenter: P,
}

impl<P: Presenter> Match<P> {
    /// Starts a match on a fresh board.
    pub fn new(presenter: P) -> Self {
        Self::with_board(Board::new(), presenter)
    }

    /// Starts a match on `board`, e.g. one built with a custom layout.
    pub fn with_board(board: Board, presenter: P) -> Self {
        Self { board, presenter }
    }

    /// Plays the current mark at `(row, col)` and notifies the presenter.
    ///
    /// Rejected moves are returned without notifying anyone; the host
    /// normally ignores them.
    #[instrument(skip(self))]
    pub fn click(&mut self, row: usize, col: usize) -> Result<MoveResult, MoveError> {
        let result = self.board.attempt_move(row, col)?;

        self.presenter.mark_placed(result.placed());
        match result {
            MoveResult::Continue { .. } => {}
            MoveResult::Winner {
                mark,
                line,
                geometry,
                ..
            } => self.presenter.game_won(mark, line, geometry),
            MoveResult::Draw { .. } => self.presenter.game_drawn(),
        }
        Ok(result)
    }

    /// Starts a new game if the current one is over.
    ///
    /// Returns whether a reset happened.
    #[instrument(skip(self), fields(state = ?self.board.state()))]
    pub fn press_reset(&mut self) -> bool {
        if !self.board.is_game_over() {
            debug!("Reset ignored while game in progress");
            return false;
        }
        self.board.reset();
        self.presenter.board_reset();
        true
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Consumes the match, returning the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
