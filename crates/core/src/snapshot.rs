//! Snapshot module - a per-frame copy of the game for renderers
//!
//! [`GameSnapshot`] is plain `Copy` data, so a renderer can hold a frame
//! without borrowing the [`Game`](crate::Game) it came from.

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Playing,
    /// The promoted piece could not be placed at the spawn anchor
    GameOver,
    /// The player asked to leave
    Quit,
}

impl Status {
    /// True for both ways a game ends
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::Playing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [(i8, i8); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            cells: value.occupied_cells(),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// `None` once the game has ended
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub status: Status,
}

impl GameSnapshot {
    /// Whether the frame shows a game still accepting commands
    pub fn playable(&self) -> bool {
        self.status == Status::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            score: 0,
            lines: 0,
            status: Status::Playing,
        }
    }
}
