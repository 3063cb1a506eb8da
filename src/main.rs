//! Terminal Tetris runner.
//!
//! No arguments or flags. Arrow keys move, rotate (Up) and soft drop (Down);
//! `q` quits. See [`term_tetris::config`] for environment variables.

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use term_tetris::config::Config;
use term_tetris::core::{Board, Game, Randomizer};
use term_tetris::input::TerminalKeys;
use term_tetris::logging;
use term_tetris::session::{self, MonotonicClock, TerminalScreen};
use term_tetris::types::IDLE_SLEEP_MS;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config)?;

    let randomizer = match config.seed {
        Some(seed) => Randomizer::new(seed),
        None => Randomizer::from_entropy(),
    };
    let mut game = Game::with_randomizer(Board::new(), randomizer);

    let mut screen = TerminalScreen::new();
    let status = session::with_attached(&mut screen, |screen| {
        session::run(
            &mut game,
            &mut TerminalKeys::new(),
            &MonotonicClock::new(),
            screen,
            Duration::from_millis(IDLE_SLEEP_MS),
        )
    })?;
    info!(?status, score = game.score(), lines = game.lines(), "exiting");
    Ok(())
}
