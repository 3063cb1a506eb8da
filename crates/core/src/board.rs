//! Board module - the settled grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that locked there. Storage is a flat row-major array, so the grid
//! dimensions are fixed for the board's whole lifetime.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by a single line clear
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y), or `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty: the placement predicate for pieces
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// In bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map_or(false, |row| row.iter().all(|cell| cell.is_some()))
    }

    /// Borrow one row, top row is 0
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Commit absolute cells to the board with the given kind.
    ///
    /// The caller has already checked the placement with a move or rotate
    /// attempt; positions outside the grid are skipped.
    pub fn lock(&mut self, cells: &[(i8, i8)], kind: PieceKind) {
        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }
    }

    /// Remove every full row and return how many were removed
    pub fn clear_completed_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Remove every full row and return the removed row indices (bottom to top).
    ///
    /// Surviving rows keep their relative order and slide down; the rows freed
    /// at the top are empty. Compaction runs in place with a read and a write
    /// cursor walking up from the floor, so the grid is never observed half
    /// cleared.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a board from rows of text, bottom-aligned.
    ///
    /// `.` is empty, a piece letter fills the cell with that kind and any other
    /// character fills it with `I`. Rows shorter than the board width are padded
    /// with empty cells; extra rows or columns are ignored.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let height = BOARD_HEIGHT as usize;
        let skip = rows.len().saturating_sub(height);
        let top = height - (rows.len() - skip);

        for (i, line) in rows.iter().skip(skip).enumerate() {
            let y = (top + i) as i8;
            for (x, ch) in line.chars().take(BOARD_WIDTH as usize).enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = PieceKind::from_char(ch).unwrap_or(PieceKind::I);
                board.set(x as i8, y, Some(kind));
            }
        }

        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_from_ascii_is_bottom_aligned() {
        let board = Board::from_ascii(&["T.........", "IIIIIIIII."]);

        assert_eq!(board.get(0, 18), Some(Some(PieceKind::T)));
        assert_eq!(board.get(1, 18), Some(None));
        assert!(board.is_occupied(8, 19));
        assert!(!board.is_occupied(9, 19));
        assert!(board.rows().take(18).all(|row| row.iter().all(|c| c.is_none())));
    }

    #[test]
    fn test_from_ascii_letters_and_fallback() {
        let board = Board::from_ascii(&["sZ#.o"]);

        assert_eq!(board.get(0, 19), Some(Some(PieceKind::S)));
        assert_eq!(board.get(1, 19), Some(Some(PieceKind::Z)));
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::I)));
        assert_eq!(board.get(3, 19), Some(None));
        assert_eq!(board.get(4, 19), Some(Some(PieceKind::O)));
        assert_eq!(board.get(5, 19), Some(None));
    }

    #[test]
    fn test_lock_writes_kind() {
        let mut board = Board::new();
        board.lock(&[(0, 19), (1, 19), (1, 18), (2, 18)], PieceKind::S);

        assert_eq!(board.get(0, 19), Some(Some(PieceKind::S)));
        assert_eq!(board.get(2, 18), Some(Some(PieceKind::S)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 4);
    }

    #[test]
    fn test_clear_keeps_row_order() {
        let mut board = Board::from_ascii(&[
            "J.........",
            "IIIIIIIIII",
            ".L........",
            "OOOOOOOOOO",
        ]);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);
        assert_eq!(board.get(1, 19), Some(Some(PieceKind::L)));
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::J)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_clear_every_row() {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                board.set(x, y, Some(PieceKind::Z));
            }
        }

        assert_eq!(board.clear_completed_lines(), BOARD_HEIGHT as usize);
        assert_eq!(board, Board::new());
    }
}
