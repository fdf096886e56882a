//! Stalemate detection.

use tracing::instrument;

use crate::board::Board;

/// Checks whether every cell holds a counter.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.empty_positions().next().is_none()
}

/// A full board with no complete line is a stalemate.
#[instrument]
pub fn is_stalemate(board: &Board) -> bool {
    is_full(board) && super::check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Counter;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3).unwrap();
        assert!(!is_full(&board));
        assert!(!is_stalemate(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3).unwrap();
        board.place(4, Counter::Cross).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_stalemate_detection() {
        let mut board = Board::new(3).unwrap();
        // X O X / O X X / O X O - full with no complete line.
        for (pos, counter) in [
            (0, Counter::Cross),
            (1, Counter::Nought),
            (2, Counter::Cross),
            (3, Counter::Nought),
            (4, Counter::Cross),
            (5, Counter::Cross),
            (6, Counter::Nought),
            (7, Counter::Cross),
            (8, Counter::Nought),
        ] {
            board.place(pos, counter).unwrap();
        }
        assert!(is_full(&board));
        assert!(is_stalemate(&board));
    }

    #[test]
    fn test_won_board_is_not_stalemate() {
        let mut board = Board::new(3).unwrap();
        for pos in [0, 1, 2] {
            board.place(pos, Counter::Cross).unwrap();
        }
        assert!(!is_stalemate(&board));
    }
}
