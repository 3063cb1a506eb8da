//! Pieces module - tetromino shapes and rotation tables
//!
//! Every kind owns a fixed list of rotation states. Each state is four mino
//! offsets inside a 4x4 box, x to the right and y downward. Rotation walks the
//! list in order and wraps; there are no wall kicks.

use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

const I_STATES: [PieceShape; 2] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
];

const J_STATES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_STATES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

const O_STATES: [PieceShape; 1] = [[(1, 0), (2, 0), (1, 1), (2, 1)]];

const S_STATES: [PieceShape; 2] = [
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

const T_STATES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_STATES: [PieceShape; 2] = [
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

/// All rotation states of a kind, in rotation order
pub fn rotation_states(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::Z => &Z_STATES,
    }
}

/// Number of distinct rotation states for a kind
pub fn rotation_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// Get the shape for a kind and rotation index.
///
/// The index is reduced modulo the kind's rotation count.
pub fn get_shape(kind: PieceKind, rotation: usize) -> PieceShape {
    let states = rotation_states(kind);
    states[rotation % states.len()]
}

/// Rotation index that follows `rotation`
pub fn next_rotation(kind: PieceKind, rotation: usize) -> usize {
    (rotation + 1) % rotation_count(kind)
}

/// Spawn position for new pieces (x, y)
pub const SPAWN_POSITION: (i8, i8) = (SPAWN_X, SPAWN_Y);

/// Get initial shape for a new piece at spawn position
pub fn get_spawn_shape(kind: PieceKind) -> PieceShape {
    get_shape(kind, 0)
}
