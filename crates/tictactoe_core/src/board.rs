//! The board: nine cells, the side to move, and the game phase.

use crate::action::{GameState, MoveError, MoveResult, Placement};
use crate::contracts::{Contract, MoveContract};
use crate::geometry::LineGeometry;
use crate::layout::Layout;
use crate::line::Line;
use crate::position::{Position, SIZE};
use crate::rules::{self, win::Grid};
use crate::types::{Cell, Mark};
use tracing::{debug, info, instrument, warn};

/// A 3x3 tic-tac-toe board.
///
/// The board exclusively owns its cells. Callers see the outcome of each
/// move through the returned [`MoveResult`], never through a live view of
/// the grid they could hold across moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Grid,
    current_turn: Mark,
    state: GameState,
    winning_line: Option<Line>,
    layout: Layout,
}

impl Board {
    /// Creates an empty board with X to move and the default layout.
    #[instrument]
    pub fn new() -> Self {
        Self::with_layout(Layout::default())
    }

    /// Creates an empty board using `layout` for strike-through geometry.
    #[instrument]
    pub fn with_layout(layout: Layout) -> Self {
        Self {
            cells: [Cell::Empty; 9],
            current_turn: Mark::X,
            state: GameState::AwaitingMove(Mark::X),
            winning_line: None,
            layout,
        }
    }

    /// Clears every cell and hands the first move back to X.
    ///
    /// The layout is kept.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset();
        }
        self.current_turn = Mark::X;
        self.state = GameState::AwaitingMove(Mark::X);
        self.winning_line = None;
        info!("Board reset");
    }

    /// Places the current mark at `(row, col)`.
    ///
    /// On success the mark is written, the board is checked for a complete
    /// line and then for a full grid, and the turn passes to the other mark
    /// only if the game continues.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `row` or `col` is outside `0..=2`
    /// - [`MoveError::GameAlreadyOver`] if the game is won or drawn
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    ///
    /// The board is unchanged after any error.
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveResult, MoveError> {
        let position = Position::from_row_col(row, col).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        MoveContract::pre(self, &position).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.current_turn;
        self.cells[position.to_index()]
            .set(mark)
            .map_err(|_| MoveError::CellOccupied(position))?;
        let placed = Placement::new(mark, position);
        debug!(%placed, "Mark placed");

        let result = if let Some((winner, line)) = rules::winning_line(&self.cells) {
            self.state = GameState::Won(winner);
            self.winning_line = Some(line);
            info!(%winner, %line, "Game won");
            MoveResult::Winner {
                placed,
                mark: winner,
                line,
                geometry: LineGeometry::for_line(line, &self.layout),
            }
        } else if rules::is_full(&self.cells) {
            self.state = GameState::Drawn;
            info!("Game drawn");
            MoveResult::Draw { placed }
        } else {
            self.current_turn = mark.opponent();
            self.state = GameState::AwaitingMove(self.current_turn);
            MoveResult::Continue {
                placed,
                next: self.current_turn,
            }
        };

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            warn!(error = %e, "Postcondition failed, move rolled back");
            *self = before;
            return Err(e);
        }

        Ok(result)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Current phase.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The mark whose turn it is, or who made the final move once the game is over.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Contents of the cell at `position`.
    pub fn cell(&self, position: Position) -> Cell {
        self.cells[position.to_index()].get()
    }

    /// The line that ended the game, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Layout used for geometry.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Positions that can still be played.
    pub fn open_positions(&self) -> Vec<Position> {
        if self.is_game_over() {
            return Vec::new();
        }
        Position::ALL
            .into_iter()
            .filter(|pos| self.cell(*pos).is_empty())
            .collect()
    }

    /// All cells in row-major order.
    pub(crate) fn grid(&self) -> &Grid {
        &self.cells
    }

    /// Overwrites a cell without any checks.
    #[cfg(test)]
    pub(crate) fn force_cell(&mut self, position: Position, cell: Cell) {
        self.cells[position.to_index()] = cell;
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let pos = row * SIZE + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < SIZE - 1 {
                    result.push('|');
                }
            }
            if row < SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
