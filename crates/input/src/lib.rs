//! Terminal input for the game.
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and offers a
//! non-blocking poll over the real terminal. At most one command comes out
//! per poll; there is no key-repeat buffering beyond what the terminal sends.

pub mod map;
pub mod poll;

pub use term_tetris_types as types;

pub use map::{handle_key_event, should_quit};
pub use poll::TerminalKeys;
