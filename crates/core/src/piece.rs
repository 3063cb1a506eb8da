//! Active falling piece
//!
//! A piece is a kind, a rotation index and an anchor. Move and rotate
//! attempts are checked against a [`Board`] and only committed when every
//! resulting mino is in bounds and on an empty cell.

use crate::board::Board;
use crate::pieces::{get_shape, next_rotation, PieceShape, SPAWN_POSITION};
use crate::types::PieceKind;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a new piece in rotation 0 at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board cells covered by the piece
    pub fn occupied_cells(&self) -> [(i8, i8); 4] {
        Self::place(self.shape(), self.x, self.y)
    }

    /// Check if all minos are at valid positions on the board
    pub fn fits(&self, board: &Board) -> bool {
        self.occupied_cells()
            .iter()
            .all(|&(x, y)| board.is_valid(x, y))
    }

    /// Shift the piece by (dx, dy) if the destination fits.
    ///
    /// `(0, 0)` doubles as the spawn check.
    /// An anchor that would leave the `i8` range is rejected like any other
    /// out-of-bounds move.
    pub fn try_move(&mut self, dx: i8, dy: i8, board: &Board) -> bool {
        let (Some(x), Some(y)) = (self.x.checked_add(dx), self.y.checked_add(dy)) else {
            return false;
        };
        let candidate = Self::place(self.shape(), x, y);
        if !candidate.iter().all(|&(x, y)| board.is_valid(x, y)) {
            return false;
        }

        self.x = x;
        self.y = y;
        true
    }

    /// Advance to the next rotation state in place, without kicks
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotation = next_rotation(self.kind, self.rotation);
        let candidate = Self::place(get_shape(self.kind, rotation), self.x, self.y);
        if !candidate.iter().all(|&(x, y)| board.is_valid(x, y)) {
            return false;
        }

        self.rotation = rotation;
        true
    }

    /// Offsets are never negative, so a saturated cell lands past the board
    /// and fails `is_valid`.
    fn place(shape: PieceShape, x: i8, y: i8) -> [(i8, i8); 4] {
        shape.map(|(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
    }
}
