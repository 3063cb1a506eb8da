//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a snapshot is composed into a
//! framebuffer by [`GameView`], then [`TerminalRenderer`] flushes it through
//! crossterm, rewriting only what changed since the last frame.
//!
//! Goals:
//! - Keep `core` free of any presentation concern (colours live in [`palette`])
//! - Keep composition pure so it can be unit-tested without a terminal
//! - Two terminal columns per board cell to compensate for glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{GameView, Viewport, GAME_OVER_TEXT};
pub use palette::kind_color;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
