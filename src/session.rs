//! The interactive loop.
//!
//! One iteration: poll at most one key without blocking, apply it, let gravity
//! catch up with the clock, draw, then idle briefly. The loop ends on quit, or
//! on game over after the screen has shown the message and a key was pressed.
//!
//! Keys, time and drawing come in through [`KeySource`], [`Clock`] and
//! [`Screen`] so the loop runs the same against a terminal or test doubles.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use crate::core::{Game, GameSnapshot, Status};
use crate::input::TerminalKeys;
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use crate::types::Command;

/// Source of player commands.
pub trait KeySource {
    /// Next pending command, or `None` right away if there is none.
    fn poll(&mut self) -> Result<Option<Command>>;

    /// Block until any key is pressed.
    fn wait_for_any_key(&mut self) -> Result<()>;
}

/// Monotonic time since some fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Something that can show a frame.
pub trait Screen {
    fn draw(&mut self, snap: &GameSnapshot) -> Result<()>;
}

/// Terminal state that has to be set up before drawing and put back after.
pub trait Attach {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
}

/// Run `f` with `screen` attached.
///
/// `exit` runs whenever `enter` was attempted, including when `enter` itself
/// fails half way. The first error is returned.
pub fn with_attached<A, T, F>(screen: &mut A, f: F) -> Result<T>
where
    A: Attach,
    F: FnOnce(&mut A) -> Result<T>,
{
    let result = screen.enter().and_then(|()| f(screen));
    let restored = screen.exit();
    let value = result?;
    restored?;
    Ok(value)
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl KeySource for TerminalKeys {
    fn poll(&mut self) -> Result<Option<Command>> {
        Ok(self.poll_command()?)
    }

    fn wait_for_any_key(&mut self) -> Result<()> {
        // Keys mashed while the last piece fell should not dismiss the message.
        self.drain()?;
        Ok(TerminalKeys::wait_for_any_key(self)?)
    }
}

/// Terminal screen: composes frames with [`GameView`] and flushes them.
pub struct TerminalScreen {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }
}

impl Attach for TerminalScreen {
    fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TerminalScreen {
    fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        let (w, h) = self.renderer.size();
        self.view.render_into(snap, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw(&self.fb)
    }
}

/// Drive `game` until it ends and return how it ended.
///
/// `idle` is slept after every drawn frame; pass zero to spin.
pub fn run<K, C, S>(
    game: &mut Game,
    keys: &mut K,
    clock: &C,
    screen: &mut S,
    idle: Duration,
) -> Result<Status>
where
    K: KeySource,
    C: Clock,
    S: Screen,
{
    game.reset_gravity_timer(clock.now());

    loop {
        if let Some(command) = keys.poll()? {
            game.apply(command);
        }
        game.tick(clock.now());

        match game.status() {
            Status::Playing => {}
            Status::Quit => return Ok(Status::Quit),
            Status::GameOver => {
                screen.draw(&game.snapshot())?;
                keys.wait_for_any_key()?;
                info!(score = game.score(), "game over acknowledged");
                return Ok(Status::GameOver);
            }
        }

        screen.draw(&game.snapshot())?;
        if !idle.is_zero() {
            thread::sleep(idle);
        }
    }
}
