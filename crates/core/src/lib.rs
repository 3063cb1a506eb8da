//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state. It does no terminal I/O:
//! commands and clock readings are passed in, and renderers read a
//! [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 settled grid with line clearing
//! - [`pieces`]: per-kind rotation tables
//! - [`piece`]: the falling piece and its move/rotate checks
//! - [`rng`]: uniform random kind selection
//! - [`game`]: the controller (gravity, commands, locking, spawning, game over)
//! - [`snapshot`]: per-frame copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Randomizer**: each kind is drawn uniformly, independent of history
//! - **Rotation**: one direction, walks the kind's state list, no wall kicks
//! - **Gravity**: one row down every 500ms; a piece that cannot move locks
//! - **Soft drop**: one row down, locking at once when blocked
//! - **Scoring**: 100 points per cleared row, no combo or multi-line bonus
//! - **Game over**: the next piece does not fit at the spawn anchor
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use term_tetris_core::{Game, Status};
//! use term_tetris_types::Command;
//!
//! let mut game = Game::new(12345);
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.tick(Duration::from_millis(600));
//!
//! assert_eq!(game.status(), Status::Playing);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{Game, LockEvent};
pub use piece::Piece;
pub use pieces::{get_shape, rotation_count, rotation_states};
pub use rng::Randomizer;
pub use snapshot::{ActiveSnapshot, GameSnapshot, Status};
