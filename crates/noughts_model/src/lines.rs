//! Winning-line indexing for arbitrary board sizes.
//!
//! A board with `n` cells per side has `2n + 2` candidate winning lines:
//! `n` rows, `n` columns and the two diagonals. The public line numbering
//! is 1-based and follows the fixed order rows, columns, main diagonal,
//! anti-diagonal, so on a 3x3 board the rows are lines 1-3, the columns
//! lines 4-6, the main diagonal line 7 and the anti-diagonal line 8.

use serde::{Deserialize, Serialize};

/// One of the `2n + 2` candidate winning lines of a board.
///
/// A `Line` is independent of any particular board instance; its cell
/// positions and public number are derived from a board size on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row `r`, counted from the top.
    Row(usize),
    /// Column `c`, counted from the left.
    Column(usize),
    /// The top-left to bottom-right diagonal.
    Diagonal,
    /// The top-right to bottom-left diagonal.
    AntiDiagonal,
}

impl Line {
    /// All lines of a board of the given size, in public numbering order.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// The 1-based public number of this line, in `[1, 2 * size + 2]`.
    pub fn number(self, size: usize) -> usize {
        match self {
            Line::Row(r) => r + 1,
            Line::Column(c) => size + c + 1,
            Line::Diagonal => 2 * size + 1,
            Line::AntiDiagonal => 2 * size + 2,
        }
    }

    /// The `size` board positions the line passes through, in scan order.
    pub fn positions(self, size: usize) -> impl Iterator<Item = usize> {
        let (start, step) = match self {
            Line::Row(r) => (r * size, 1),
            Line::Column(c) => (c, size),
            Line::Diagonal => (0, size + 1),
            Line::AntiDiagonal => (size - 1, size - 1),
        };
        (0..size).map(move |i| start + i * step)
    }

    /// Whether the line passes through the given position.
    pub fn contains(self, size: usize, pos: usize) -> bool {
        self.positions(size).any(|p| p == pos)
    }
}
