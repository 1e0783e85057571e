//! Interactive game session: the drag-paint state machine.
//!
//! A [`Game`] owns the hidden solution board, the player's board, the cross
//! grid, and the currently selected paint index. Pointer events drive the
//! drag machine: pointer-down snapshots the play state and edits the anchor
//! cell, pointer-move extends or retracts the straight-line span from the
//! anchor (restoring retracted cells from the snapshot), and pointer-up
//! finalizes the gesture and runs the completion check. Returning the
//! pointer to the anchor cell abandons the drag.
//!
//! Once the player's board matches the solution the session freezes: all
//! crosses are cleared and further pointer events are ignored.

use thiserror::Error;

use crate::drag::{snap_to_cardinal, CellMetrics, Point, Span, SpanChange};
use crate::key::{Axis, KeyIsland};
use crate::models::{Board, BoardError, CrossGrid};

/// Error type for game session failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Pointer event arrived in the wrong drag state: a second pointer-down
    /// while a gesture is active, or a move/up with no gesture active
    #[error("invalid drag state: {0}")]
    InvalidDragState(&'static str),
    /// Cell access or color validation failure
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Which pointer button initiated a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// The paint button: toggles the selected color on the anchor cell.
    Paint,
    /// The cross button: toggles the anchor cell's cross mark.
    Cross,
}

/// State carried by an active drag gesture.
#[derive(Debug, Clone)]
struct DragState {
    /// Raw pointer-down position; axis snapping measures from here.
    origin: Point,
    anchor: (usize, usize),
    /// The anchor's post-edit (value, crossed) pair, stamped onto span cells.
    stamp: (u8, bool),
    /// Pre-drag play state, with the anchor's edited aspect already
    /// committed as the baseline.
    snapshot_board: Board,
    snapshot_cross: CrossGrid,
    span: Span,
}

/// One play session of a puzzle.
///
/// # Examples
///
/// ```
/// use picrox::drag::Point;
/// use picrox::game::{Game, PointerButton};
/// use picrox::models::{Board, Palette};
///
/// let mut solution = Board::new(5, 5, Palette::default());
/// solution.set(0, 0, 1).unwrap();
/// let mut game = Game::new(solution);
///
/// // Click the top-left cell (cells are 18x18 pixels).
/// game.pointer_down(Point::new(9.0, 9.0), PointerButton::Paint).unwrap();
/// let done = game.pointer_up().unwrap();
/// assert!(done);
/// assert!(game.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    solution: Board,
    player: Board,
    cross: CrossGrid,
    selected: u8,
    complete: bool,
    metrics: CellMetrics,
    drag: Option<DragState>,
}

impl Game {
    /// Start a session for `solution` with default cell metrics.
    ///
    /// The player board starts all-empty with the solution's dimensions and
    /// palette; rows and columns whose solution key is the empty sentinel
    /// are crossed out immediately.
    pub fn new(solution: Board) -> Self {
        Self::with_metrics(solution, CellMetrics::default())
    }

    /// Start a session with explicit pointer-to-cell metrics.
    pub fn with_metrics(solution: Board, metrics: CellMetrics) -> Self {
        let (rows, cols) = solution.dimensions();
        let player = Board::new(rows, cols, solution.palette().clone());
        let mut game = Game {
            solution,
            player,
            cross: CrossGrid::new(rows, cols, false),
            selected: 1,
            complete: false,
            metrics,
            drag: None,
        };
        game.cross_empty_lines();
        game
    }

    /// The hidden solution board.
    pub fn solution(&self) -> &Board {
        &self.solution
    }

    /// The player's board.
    pub fn player(&self) -> &Board {
        &self.player
    }

    /// The player's cross marks.
    pub fn cross(&self) -> &CrossGrid {
        &self.cross
    }

    /// The currently selected paint index (1-based).
    pub fn selected(&self) -> u8 {
        self.selected
    }

    /// Whether the puzzle has been completed (session frozen).
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether a drag gesture is currently active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The clue keys the player solves against, one per line along `axis`.
    pub fn keys(&self, axis: Axis) -> Vec<Vec<KeyIsland>> {
        self.solution.keys(axis)
    }

    /// Select the paint index for subsequent paint gestures.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidColorIndex`] (wrapped) unless
    /// `1 <= index <= palette.size()`.
    pub fn select_color(&mut self, index: u8) -> Result<(), GameError> {
        let size = self.player.palette().size();
        if index == 0 || index > size {
            return Err(BoardError::InvalidColorIndex { value: index, size }.into());
        }
        self.selected = index;
        Ok(())
    }

    /// Begin a drag gesture at `point`.
    ///
    /// Returns whether a gesture began: `false` when the point is not over
    /// a cell or the session is complete. Applies the single-cell edit to
    /// the anchor immediately, and snapshots the play state for rollback
    /// with the anchor's edited aspect committed as the baseline.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDragState`] if a gesture is already
    /// active.
    pub fn pointer_down(&mut self, point: Point, button: PointerButton) -> Result<bool, GameError> {
        if self.complete {
            return Ok(false);
        }
        if self.drag.is_some() {
            return Err(GameError::InvalidDragState("pointer-down while dragging"));
        }
        let (rows, cols) = self.player.dimensions();
        let Some(anchor) = self.metrics.cell_at(point, rows, cols) else {
            return Ok(false);
        };

        let mut snapshot_board = self.player.clone();
        let mut snapshot_cross = self.cross.clone();
        self.edit_cell(anchor, button)?;

        let value = self.player.get(anchor.0, anchor.1)?;
        let crossed = self.cross.get(anchor.0, anchor.1).map_err(BoardError::from)?;
        match button {
            PointerButton::Paint => snapshot_board.set(anchor.0, anchor.1, value)?,
            PointerButton::Cross => {
                snapshot_cross.set(anchor.0, anchor.1, crossed).map_err(BoardError::from)?
            }
        }

        self.drag = Some(DragState {
            origin: point,
            anchor,
            stamp: (value, crossed),
            snapshot_board,
            snapshot_cross,
            span: Span::empty(),
        });
        Ok(true)
    }

    /// Update the active gesture for a pointer position.
    ///
    /// Snaps the movement onto the dominant cardinal axis through the
    /// pointer-down position and reshapes the span accordingly: a one-cell
    /// extend stamps just the new cell, a one-cell retract restores just
    /// the dropped cell, anything else restores the whole snapshot and
    /// re-stamps the span. A position outside the grid leaves the span
    /// untouched until the pointer returns.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDragState`] if no gesture is active.
    pub fn pointer_move(&mut self, point: Point) -> Result<(), GameError> {
        if self.complete {
            return Ok(());
        }
        let Some(drag) = self.drag.as_ref() else {
            return Err(GameError::InvalidDragState("pointer-move while idle"));
        };

        let (snapped, axis) = snap_to_cardinal(drag.origin, point);
        let (rows, cols) = self.player.dimensions();
        let Some(end) = self.metrics.cell_at(snapped, rows, cols) else {
            return Ok(());
        };
        let new_span = Span::between(drag.anchor, end, axis);
        let change = drag.span.change_to(&new_span);
        let anchor = drag.anchor;
        let stamp = drag.stamp;

        match change {
            SpanChange::Unchanged => {}
            SpanChange::Extend => {
                if let Some(cell) = new_span.end(anchor) {
                    self.apply_stamp(cell, stamp)?;
                }
            }
            SpanChange::Retract => {
                let dropped = self.drag.as_ref().and_then(|d| d.span.end(anchor));
                if let Some(cell) = dropped {
                    self.restore_cell(cell)?;
                }
            }
            SpanChange::Clear => self.restore_snapshot(),
            SpanChange::Resync => {
                self.restore_snapshot();
                let cells: Vec<_> = new_span.cells(anchor).collect();
                for cell in cells {
                    self.apply_stamp(cell, stamp)?;
                }
            }
        }

        if let Some(drag) = self.drag.as_mut() {
            drag.span = new_span;
        }
        Ok(())
    }

    /// Finish the active gesture.
    ///
    /// Returns whether this release completed the puzzle. On completion the
    /// session freezes and every cross mark is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDragState`] if no gesture is active.
    pub fn pointer_up(&mut self) -> Result<bool, GameError> {
        if self.complete {
            return Ok(false);
        }
        if self.drag.take().is_none() {
            return Err(GameError::InvalidDragState("pointer-up while idle"));
        }
        if self.player.matches(&self.solution) {
            self.finalize();
            return Ok(true);
        }
        Ok(false)
    }

    /// Fill the player board from the solution and finish the session.
    pub fn reveal_solution(&mut self) {
        self.drag = None;
        self.player = self.solution.clone();
        self.finalize();
    }

    fn finalize(&mut self) {
        self.complete = true;
        self.cross.fill(false);
    }

    /// Apply the single-cell edit for a pointer-down at `cell`.
    ///
    /// Painting toggles: a cell already holding the selected index reverts
    /// to empty, anything else takes the selected index, and a non-empty
    /// result clears the cell's cross. Crossing toggles the mark; turning
    /// it on empties the cell.
    fn edit_cell(&mut self, cell: (usize, usize), button: PointerButton) -> Result<(), GameError> {
        let (row, col) = cell;
        match button {
            PointerButton::Paint => {
                let current = self.player.get(row, col)?;
                let value = if current == self.selected { 0 } else { self.selected };
                self.player.set(row, col, value)?;
                if value != 0 {
                    self.cross.set(row, col, false).map_err(BoardError::from)?;
                }
            }
            PointerButton::Cross => {
                let crossed = !self.cross.get(row, col).map_err(BoardError::from)?;
                self.cross.set(row, col, crossed).map_err(BoardError::from)?;
                if crossed {
                    self.player.set(row, col, 0)?;
                }
            }
        }
        Ok(())
    }

    fn apply_stamp(&mut self, cell: (usize, usize), stamp: (u8, bool)) -> Result<(), GameError> {
        self.player.set(cell.0, cell.1, stamp.0)?;
        self.cross.set(cell.0, cell.1, stamp.1).map_err(BoardError::from)?;
        Ok(())
    }

    fn restore_cell(&mut self, cell: (usize, usize)) -> Result<(), GameError> {
        let Some(drag) = self.drag.as_ref() else {
            return Err(GameError::InvalidDragState("restore while idle"));
        };
        let value = drag.snapshot_board.get(cell.0, cell.1)?;
        let crossed = drag.snapshot_cross.get(cell.0, cell.1).map_err(BoardError::from)?;
        self.player.set(cell.0, cell.1, value)?;
        self.cross.set(cell.0, cell.1, crossed).map_err(BoardError::from)?;
        Ok(())
    }

    fn restore_snapshot(&mut self) {
        if let Some(drag) = self.drag.as_ref() {
            self.player = drag.snapshot_board.clone();
            self.cross = drag.snapshot_cross.clone();
        }
    }

    /// Cross out every row and column whose solution key is the empty
    /// sentinel. Runs once at construction.
    fn cross_empty_lines(&mut self) {
        let (rows, cols) = self.solution.dimensions();
        for (row, key) in self.solution.keys(Axis::Row).iter().enumerate() {
            if key[0].is_empty_line() {
                for col in 0..cols {
                    let _ = self.cross.set(row, col, true);
                }
            }
        }
        for (col, key) in self.solution.keys(Axis::Column).iter().enumerate() {
            if key[0].is_empty_line() {
                for row in 0..rows {
                    let _ = self.cross.set(row, col, true);
                }
            }
        }
    }
}
