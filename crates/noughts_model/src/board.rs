//! Board storage, placement validation and coordinate conversion.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::lines::Line;
use crate::rules;
use crate::types::{Counter, GameStatus};

/// Smallest board size the model supports.
pub const MIN_BOARD_SIZE: usize = 3;

/// Error returned when constructing a board with an unsupported size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("board size {size} is below the minimum of {MIN_BOARD_SIZE}")]
pub struct SizeError {
    /// The rejected size.
    #[error(not(source))]
    pub size: usize,
}

/// Errors that can reject a placement.
///
/// Every rejection leaves the board untouched and is reported only to
/// the immediate caller; no error state is retained between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// The counter argument is not one of the two playable counters.
    #[display("{_0:?} is not a playable counter")]
    InvalidCounter(#[error(not(source))] Counter),
    /// The position lies outside the board.
    #[display("position {_0} is outside the board")]
    OutOfBounds(#[error(not(source))] usize),
    /// The target cell already holds a counter.
    #[display("position {_0} is already occupied")]
    Occupied(#[error(not(source))] usize),
    /// The game has already ended.
    #[display("the game has already ended")]
    GameOver,
}

/// The noughts-and-crosses board model.
///
/// Owns the cell array and game status for one game of a fixed size.
/// Collaborators mutate it through [`Board::place`] / [`Board::place_at`]
/// and observe results through the query methods; the outcome rules run
/// as a side effect of each successful placement. A single caller owns
/// the board and serializes all mutation; queries are side-effect-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Counter>,
    status: GameStatus,
}

impl Board {
    /// Creates an empty board with `size` cells per side.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError`] when `size` is below [`MIN_BOARD_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, SizeError> {
        if size < MIN_BOARD_SIZE {
            return Err(SizeError { size });
        }
        Ok(Self {
            size,
            cells: vec![Counter::Empty; size * size],
            status: GameStatus::InProgress,
        })
    }

    /// Clears every cell and restarts the game, reusing the allocation.
    ///
    /// Safe to call at any phase; a freshly reset board is
    /// indistinguishable from a newly constructed one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.fill(Counter::Empty);
        self.status = GameStatus::InProgress;
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size * size`).
    pub fn positions(&self) -> usize {
        self.size * self.size
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The completed line, when the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Public number of the winning line, or 0 when the game has not
    /// been won.
    pub fn winning_line_number(&self) -> usize {
        self.winning_line().map_or(0, |line| line.number(self.size))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Counter] {
        &self.cells
    }

    /// The counter at an absolute position, or `None` out of range.
    pub fn counter_at(&self, pos: usize) -> Option<Counter> {
        self.cells.get(pos).copied()
    }

    /// The counter at a (row, column) coordinate, or `None` out of range.
    pub fn counter_at_coords(&self, row: usize, column: usize) -> Option<Counter> {
        self.position_of(row, column)
            .and_then(|pos| self.counter_at(pos))
    }

    /// Whether the cell at `pos` is in range and empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.counter_at(pos), Some(Counter::Empty))
    }

    /// Absolute position of a (row, column) coordinate.
    pub fn position_of(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.size && column < self.size).then(|| column + self.size * row)
    }

    /// (row, column) coordinate of an absolute position.
    pub fn coords_of(&self, pos: usize) -> Option<(usize, usize)> {
        (pos < self.positions()).then(|| (pos / self.size, pos % self.size))
    }

    /// All empty positions, in increasing order.
    pub fn empty_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Counter::Empty)
            .map(|(pos, _)| pos)
    }

    /// Places a counter at an absolute position and refreshes the game
    /// status.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::GameOver`] when the game has already ended.
    /// - [`PlaceError::InvalidCounter`] when `counter` is not a playable
    ///   counter.
    /// - [`PlaceError::OutOfBounds`] when `pos` is outside the board.
    /// - [`PlaceError::Occupied`] when the target cell is not empty.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: usize, counter: Counter) -> Result<(), PlaceError> {
        if self.status.is_over() {
            return Err(PlaceError::GameOver);
        }
        if !counter.is_player() {
            return Err(PlaceError::InvalidCounter(counter));
        }
        if pos >= self.positions() {
            return Err(PlaceError::OutOfBounds(pos));
        }
        if self.cells[pos] != Counter::Empty {
            return Err(PlaceError::Occupied(pos));
        }
        self.cells[pos] = counter;
        self.update_status();
        Ok(())
    }

    /// Places a counter at a (row, column) coordinate.
    ///
    /// Converts to the absolute position `column + size * row` and then
    /// behaves as [`Board::place`], with out-of-range coordinates
    /// reported as [`PlaceError::OutOfBounds`].
    #[instrument(skip(self))]
    pub fn place_at(
        &mut self,
        row: usize,
        column: usize,
        counter: Counter,
    ) -> Result<(), PlaceError> {
        let pos = self.position_of(row, column).ok_or_else(|| {
            // Saturate: extreme coordinates must report out of range,
            // not overflow while computing the error payload.
            PlaceError::OutOfBounds(column.saturating_add(self.size.saturating_mul(row)))
        })?;
        self.place(pos, counter)
    }

    /// The four corner positions, in scan order top-left, top-right,
    /// bottom-left, bottom-right.
    pub fn corners(&self) -> [usize; 4] {
        let n = self.size;
        [0, n - 1, n * (n - 1), n * n - 1]
    }

    /// The corner diagonally opposite to `corner`, or `None` when
    /// `corner` is not a corner position.
    pub fn opposite_corner(&self, corner: usize) -> Option<usize> {
        // Opposite corners mirror through the centre of the board.
        self.corners()
            .contains(&corner)
            .then(|| self.positions() - 1 - corner)
    }

    /// The four edge-midpoint positions, in scan order mid-left,
    /// mid-top, mid-right, mid-bottom.
    ///
    /// Even sizes have no exact midpoint; integer truncation picks the
    /// lower of the two middle cells.
    pub fn mid_sides(&self) -> [usize; 4] {
        let n = self.size;
        let mid = (n - 1) / 2;
        [mid * n, mid, mid * n + n - 1, n * (n - 1) + mid]
    }

    /// The unique centre cell, present only on odd-sized boards.
    pub fn centre(&self) -> Option<usize> {
        (self.size % 2 == 1).then(|| self.size * self.size / 2)
    }

    /// Refreshes the game status after a successful placement.
    fn update_status(&mut self) {
        if let Some((winner, line)) = rules::check_winner(self) {
            self.status = GameStatus::Won { winner, line };
        } else if rules::is_full(self) {
            self.status = GameStatus::Stalemate;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
                for column in 0..self.size {
                    if column > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "---")?;
                }
                writeln!(f)?;
            }
            for column in 0..self.size {
                if column > 0 {
                    write!(f, "|")?;
                }
                let symbol = match self.cells[column + self.size * row] {
                    Counter::Empty => ' ',
                    Counter::Nought => 'O',
                    Counter::Cross => 'X',
                };
                write!(f, " {symbol} ")?;
            }
        }
        Ok(())
    }
}
