//! Pure noughts-and-crosses game logic for generalized NxN boards.
//!
//! This crate models the board of a noughts-and-crosses game of any
//! size `n >= 3`, decoupled from presentation: position storage,
//! placement validation, win and stalemate detection, and a
//! fixed-priority heuristic engine that recommends the best next move.
//! Rendering, input mapping and cumulative score keeping are
//! collaborator concerns; they consume the board purely through its
//! queries and mutators.
//!
//! # Example
//!
//! ```
//! use noughts_model::{Board, Counter, GameStatus};
//!
//! let mut board = Board::new(3)?;
//! board.place(4, Counter::Cross)?;
//! assert_eq!(board.status(), GameStatus::InProgress);
//!
//! // With the centre taken, the best reply is a corner.
//! assert_eq!(board.optimal_move(Counter::Nought), Some(0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod hints;
mod lines;
mod rules;
mod types;

pub use board::{Board, MIN_BOARD_SIZE, PlaceError, SizeError};
pub use hints::optimal_move;
pub use lines::Line;
pub use rules::{check_winner, is_full, is_stalemate};
pub use types::{Counter, GameStatus};
