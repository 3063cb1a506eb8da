//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (3, 0), i.e. `BOARD_WIDTH / 2 - 2`
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_INTERVAL_MS` | 500 | Time between forced downward steps |
//! | `IDLE_SLEEP_MS` | 10 | Pause at the end of each loop iteration |
//! | `POINTS_PER_LINE` | 100 | Score per cleared row, linear |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_char('t'), Some(PieceKind::T));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Anchor column for freshly spawned pieces
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Anchor row for freshly spawned pieces
pub const SPAWN_Y: i8 = 0;

/// Gravity interval in milliseconds (one forced step down every 0.5s)
pub const GRAVITY_INTERVAL_MS: u64 = 500;

/// Idle pause at the end of each loop iteration
pub const IDLE_SLEEP_MS: u64 = 10;

/// Points awarded per cleared row
pub const POINTS_PER_LINE: u32 = 100;

/// The seven tetromino piece kinds
///
/// Declaration order is the canonical order used by the randomizer and
/// by the colour palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from its letter (case-insensitive)
    ///
    /// ```
    /// use term_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('i'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('O'), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_char('x'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'i' => Some(PieceKind::I),
            'j' => Some(PieceKind::J),
            'l' => Some(PieceKind::L),
            'o' => Some(PieceKind::O),
            's' => Some(PieceKind::S),
            't' => Some(PieceKind::T),
            'z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Upper-case letter used in logs and the preview panel
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Player commands, one per polled key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Advance to the next rotation state
    Rotate,
    /// Drop piece one cell; locks it if it cannot move
    SoftDrop,
    /// End the game immediately
    Quit,
}
