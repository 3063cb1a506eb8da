//! Board tests - settled grid, locking, and line clears

use term_tetris::core::Board;
use term_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
            assert!(!board.is_occupied(x, y));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_is_occupied() {
    let mut board = Board::new();

    assert!(!board.is_occupied(5, 10));
    board.set(5, 10, Some(PieceKind::T));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_valid(5, 10));

    // Out of bounds is neither occupied nor valid
    assert!(!board.is_occupied(-1, 0));
    assert!(!board.is_valid(-1, 0));
    assert!(!board.is_occupied(0, BOARD_HEIGHT as i8));
}

#[test]
fn test_board_lock() {
    let mut board = Board::new();

    board.lock(&[(3, 5), (4, 5), (3, 6), (4, 6)], PieceKind::O);

    assert_eq!(board.get(3, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(3, 6), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 6), Some(Some(PieceKind::O)));
    assert_eq!(board.get(5, 5), Some(None));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    fill_row(&mut board, 5, PieceKind::T);
    assert!(board.is_row_full(5));

    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 6, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(6));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_clear_no_full_rows() {
    let mut board = Board::from_ascii(&["TTTTTTTTT.", "T.T.T.T.T."]);
    let before = board.clone();

    assert_eq!(board.clear_completed_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_full_rows_shifts_down() {
    let mut board = Board::new();
    fill_row(&mut board, 18, PieceKind::I);
    fill_row(&mut board, 19, PieceKind::O);
    board.set(0, 17, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 18]);

    // The T dropped by the two cleared rows
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(0, 17), Some(None));
}

#[test]
fn test_clear_non_adjacent_rows_keeps_order() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);
    fill_row(&mut board, 10, PieceKind::I);
    fill_row(&mut board, 15, PieceKind::O);

    board.set(0, 4, Some(PieceKind::J));
    board.set(0, 9, Some(PieceKind::L));
    board.set(0, 14, Some(PieceKind::S));
    board.set(0, 19, Some(PieceKind::Z));

    assert_eq!(board.clear_completed_lines(), 3);

    // Surviving rows, top to bottom: J, L, S, Z markers in the same order
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::S)));
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 7), Some(Some(PieceKind::J)));

    // Three empty rows introduced at the top
    for y in 0..3 {
        assert!(board.row(y).unwrap().iter().all(|c| c.is_none()));
    }
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
    assert!(board.rows().all(|r| r.len() == BOARD_WIDTH as usize));
}

#[test]
fn test_clear_is_idempotent() {
    let mut board = Board::from_ascii(&[
        "S.........",
        "IIIIIIIIII",
        "IIIIIIIIII",
    ]);

    assert_eq!(board.clear_completed_lines(), 2);
    let after_first = board.clone();
    assert_eq!(board.clear_completed_lines(), 0);
    assert_eq!(board, after_first);
}

#[test]
fn test_clear_row_with_one_gap_after_lock() {
    let mut board = Board::from_ascii(&["JJJJ.JJJJJ"]);
    assert_eq!(board.clear_completed_lines(), 0);

    board.lock(&[(4, 19)], PieceKind::T);
    assert_eq!(board.clear_completed_lines(), 1);
    assert_eq!(board, Board::new());
}
