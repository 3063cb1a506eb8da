//! Non-blocking keyboard source backed by crossterm.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::Command;

/// Reads key events from the terminal without waiting for them.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }

    /// Return at most one command, or `None` if no key is pending.
    ///
    /// Non-key events (resize, focus, mouse) and unmapped keys are consumed
    /// and yield `None`.
    pub fn poll_command(&mut self) -> io::Result<Option<Command>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(handle_key_event(key)),
            _ => Ok(None),
        }
    }

    /// Block until any key is pressed.
    pub fn wait_for_any_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }

    /// Discard everything already queued.
    pub fn drain(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        Ok(())
    }
}
