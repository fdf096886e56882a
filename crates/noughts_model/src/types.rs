//! Core domain types for noughts-and-crosses.

use serde::{Deserialize, Serialize};

use crate::lines::Line;

/// The value held by one board cell.
///
/// The closed set of variants means no out-of-band sentinel can ever be
/// stored on the board; an unoccupied cell is simply [`Counter::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Counter {
    /// No counter at this cell.
    Empty,
    /// A nought counter.
    Nought,
    /// A cross counter.
    Cross,
}

impl Counter {
    /// Returns true for the two playable counters.
    pub fn is_player(self) -> bool {
        !matches!(self, Counter::Empty)
    }

    /// Returns the opposing player's counter.
    ///
    /// `Empty` has no opponent and is returned unchanged; operations
    /// taking a player argument reject `Empty` before getting here.
    pub fn opponent(self) -> Self {
        match self {
            Counter::Nought => Counter::Cross,
            Counter::Cross => Counter::Nought,
            Counter::Empty => Counter::Empty,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a completed line.
    Won {
        /// The counter that completed the line.
        winner: Counter,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no complete line.
    Stalemate,
}

impl GameStatus {
    /// Whether the game has ended, by win or stalemate.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}
