//! term-tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces
//! that tie them into a program: environment [`config`], [`logging`] setup
//! and the interactive [`session`] loop.

pub use term_tetris_core as core;
pub use term_tetris_input as input;
pub use term_tetris_term as term;
pub use term_tetris_types as types;

pub mod config;
pub mod logging;
pub mod session;
