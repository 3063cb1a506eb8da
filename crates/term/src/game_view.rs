//! GameView: maps a core `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, in terminal cells from the top-left corner:
//!
//! ```text
//!  . . .[][] . . . . .   Next:
//!  . . .[][] . . . . .    [][]
//!  ...                    [][]
//!
//! Score: 300
//! Lines: 3
//! ```

use crate::core::pieces::get_spawn_shape;
use crate::core::{GameSnapshot, Status};
use crate::fb::{FrameBuffer, Style};
use crate::palette::kind_color;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Message shown once the spawn check fails.
pub const GAME_OVER_TEXT: &str = "Game Over! Press any key to exit.";

/// Terminal columns per board cell.
const CELL_W: u16 = 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders snapshots with two terminal columns per board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    show_next: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { show_next: true }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide the next-piece preview.
    pub fn without_next(mut self) -> Self {
        self.show_next = false;
        self
    }

    /// Render the current game state into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => draw_block(fb, x as i8, y as i8, *kind),
                    None => fb.put_str(x as u16 * CELL_W, y as u16, " .", Style::default()),
                }
            }
        }

        if let Some(active) = snap.active {
            for &(x, y) in &active.cells {
                draw_block(fb, x, y, active.kind);
            }
        }

        let text_y = BOARD_HEIGHT as u16 + 1;
        fb.put_str(0, text_y, &format!("Score: {}", snap.score), Style::default());
        fb.put_str(0, text_y + 1, &format!("Lines: {}", snap.lines), Style::default());

        if self.show_next {
            draw_next(fb, snap.next);
        }

        if snap.status == Status::GameOver {
            fb.put_str(
                BOARD_WIDTH as u16,
                BOARD_HEIGHT as u16 / 2,
                GAME_OVER_TEXT,
                Style::default().bold(),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

/// Draw `[]` for a board cell; cells outside the board are skipped.
fn draw_block(fb: &mut FrameBuffer, x: i8, y: i8, kind: PieceKind) {
    if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
        return;
    }
    fb.put_str(
        x as u16 * CELL_W,
        y as u16,
        "[]",
        Style::fg(kind_color(kind)),
    );
}

fn draw_next(fb: &mut FrameBuffer, kind: PieceKind) {
    let panel_x = BOARD_WIDTH as u16 * CELL_W + 3;
    fb.put_str(panel_x, 0, "Next:", Style::default());
    for (dx, dy) in get_spawn_shape(kind) {
        fb.put_str(
            panel_x + 1 + dx as u16 * CELL_W,
            1 + dy as u16,
            "[]",
            Style::fg(kind_color(kind)),
        );
    }
}
