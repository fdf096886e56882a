//! Win detection.

use tracing::instrument;

use crate::board::Board;
use crate::lines::Line;
use crate::types::Counter;

/// Scans all candidate lines for a complete one.
///
/// Lines are scanned in public numbering order (rows, columns, main
/// diagonal, anti-diagonal), so when a single move completes more than
/// one line the lowest-numbered line is reported.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Counter, Line)> {
    Line::all(board.size())
        .find_map(|line| complete_line(board, line).map(|winner| (winner, line)))
}

/// The counter filling every cell of `line`, if any.
fn complete_line(board: &Board, line: Line) -> Option<Counter> {
    let mut positions = line.positions(board.size());
    let first = board.counter_at(positions.next()?)?;
    if first.is_player() && positions.all(|pos| board.counter_at(pos) == Some(first)) {
        Some(first)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(positions: &[usize], counter: Counter) -> Board {
        let mut board = Board::new(3).unwrap();
        for &pos in positions {
            board.place(pos, counter).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[0, 1, 2], Counter::Cross);
        assert_eq!(check_winner(&board), Some((Counter::Cross, Line::Row(0))));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[0, 4, 8], Counter::Nought);
        assert_eq!(check_winner(&board), Some((Counter::Nought, Line::Diagonal)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[0, 1], Counter::Cross);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_lowest_numbered_line_wins_tie() {
        // The final move at 0 completes the top row and the left column
        // at once; the row carries the lower public number.
        let board = board_with(&[1, 2, 3, 6, 0], Counter::Cross);
        assert_eq!(check_winner(&board), Some((Counter::Cross, Line::Row(0))));
    }

    #[test]
    fn test_winner_on_larger_board() {
        let mut board = Board::new(4).unwrap();
        for pos in [3, 6, 9, 12] {
            board.place(pos, Counter::Nought).unwrap();
        }
        assert_eq!(
            check_winner(&board),
            Some((Counter::Nought, Line::AntiDiagonal))
        );
    }
}
