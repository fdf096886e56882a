//! Tests for outcome detection and the public winning-line numbering.

use noughts_model::{Board, Counter, GameStatus, Line};

fn filled(size: usize, positions: &[usize], counter: Counter) -> Board {
    let mut board = Board::new(size).unwrap();
    for &pos in positions {
        board.place(pos, counter).unwrap();
    }
    board
}

#[test]
fn test_top_row_is_line_one() {
    let board = filled(3, &[0, 1, 2], Counter::Cross);
    assert_eq!(
        board.status(),
        GameStatus::Won {
            winner: Counter::Cross,
            line: Line::Row(0)
        }
    );
    assert_eq!(board.winning_line_number(), 1);
}

#[test]
fn test_left_column_is_line_four() {
    let board = filled(3, &[0, 3, 6], Counter::Nought);
    assert_eq!(board.winning_line(), Some(Line::Column(0)));
    assert_eq!(board.winning_line_number(), 4);
}

#[test]
fn test_main_diagonal_is_line_seven() {
    let board = filled(3, &[0, 4, 8], Counter::Cross);
    assert_eq!(board.winning_line(), Some(Line::Diagonal));
    assert_eq!(board.winning_line_number(), 7);
}

#[test]
fn test_anti_diagonal_is_line_eight() {
    let board = filled(3, &[2, 4, 6], Counter::Cross);
    assert_eq!(board.winning_line(), Some(Line::AntiDiagonal));
    assert_eq!(board.winning_line_number(), 8);
}

#[test]
fn test_numbering_scales_with_board_size() {
    let board = filled(4, &[0, 1, 2, 3], Counter::Cross);
    assert_eq!(board.winning_line_number(), 1);

    let board = filled(4, &[0, 4, 8, 12], Counter::Cross);
    assert_eq!(board.winning_line_number(), 5);

    let board = filled(4, &[0, 5, 10, 15], Counter::Nought);
    assert_eq!(board.winning_line_number(), 9);

    let board = filled(4, &[3, 6, 9, 12], Counter::Nought);
    assert_eq!(board.winning_line_number(), 10);
}

#[test]
fn test_double_completion_reports_lowest_line() {
    // Placing 0 last completes both the top row (line 1) and the left
    // column (line 4) at once.
    let board = filled(3, &[1, 2, 3, 6, 0], Counter::Cross);
    assert_eq!(board.winning_line_number(), 1);
}

#[test]
fn test_in_progress_has_no_winning_line() {
    let board = filled(3, &[0, 1], Counter::Cross);
    assert_eq!(board.status(), GameStatus::InProgress);
    assert_eq!(board.winning_line(), None);
    assert_eq!(board.winning_line_number(), 0);
}

#[test]
fn test_full_board_without_line_is_stalemate() {
    let mut board = Board::new(3).unwrap();
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
    assert_eq!(board.status(), GameStatus::Stalemate);
    assert_eq!(board.winning_line_number(), 0);
}

#[test]
fn test_winner_recorded_in_status() {
    let board = filled(3, &[2, 5, 8], Counter::Nought);
    match board.status() {
        GameStatus::Won { winner, line } => {
            assert_eq!(winner, Counter::Nought);
            assert_eq!(line, Line::Column(2));
        }
        status => panic!("expected a won game, got {status:?}"),
    }
}
