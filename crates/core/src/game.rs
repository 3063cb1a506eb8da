//! Game module - the controller state machine
//!
//! Ties together the board, the active and next pieces, the randomizer and the
//! score. Commands and clock readings come in from outside; the game decides
//! when a piece locks, how many points a clear is worth and when play ends.

use std::mem;
use std::time::Duration;

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::Randomizer;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, Status};
use crate::types::{Command, PieceKind, GRAVITY_INTERVAL_MS, POINTS_PER_LINE};

/// Result of committing the active piece to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    /// The promoted next piece failed the spawn check
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Piece,
    next: Piece,
    randomizer: Randomizer,
    score: u32,
    lines: u32,
    status: Status,
    /// Clock reading of the last gravity step
    last_gravity: Duration,
    gravity_interval: Duration,
    last_event: Option<LockEvent>,
}

impl Game {
    /// Create a new game on an empty board with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_randomizer(Board::new(), Randomizer::new(seed))
    }

    /// Create a new game on a prepared board
    pub fn with_board(board: Board, seed: u64) -> Self {
        Self::with_randomizer(board, Randomizer::new(seed))
    }

    /// Create a new game from a board and a randomizer.
    ///
    /// The first piece goes through the same spawn check as every later one,
    /// so a board that already blocks the spawn anchor starts in game over.
    pub fn with_randomizer(board: Board, mut randomizer: Randomizer) -> Self {
        let active = Piece::spawn(randomizer.next_kind());
        let next = Piece::spawn(randomizer.next_kind());
        Self::from_parts(board, active, next, randomizer)
    }

    /// Create a game from explicit pieces, e.g. to set up a puzzle position.
    ///
    /// `active` goes through the spawn check at its given position; the
    /// randomizer only supplies pieces after `next`.
    pub fn from_parts(
        board: Board,
        mut active: Piece,
        next: Piece,
        randomizer: Randomizer,
    ) -> Self {
        let status = if active.try_move(0, 0, &board) {
            Status::Playing
        } else {
            Status::GameOver
        };
        info!(
            seed = randomizer.seed(),
            first = active.kind.letter(),
            ?status,
            "game started"
        );

        Self {
            board,
            active,
            next,
            randomizer,
            score: 0,
            lines: 0,
            status,
            last_gravity: Duration::ZERO,
            gravity_interval: Duration::from_millis(GRAVITY_INTERVAL_MS),
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn seed(&self) -> u64 {
        self.randomizer.seed()
    }

    pub fn gravity_interval(&self) -> Duration {
        self.gravity_interval
    }

    /// Restart the gravity timer from a clock reading.
    ///
    /// Call once when the clock and the game are not created together.
    pub fn reset_gravity_timer(&mut self, now: Duration) {
        self.last_gravity = now;
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply one player command.
    ///
    /// Returns whether anything changed. Once the game has ended every
    /// command is ignored.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.status.is_over() {
            return false;
        }

        match command {
            Command::MoveLeft => self.active.try_move(-1, 0, &self.board),
            Command::MoveRight => self.active.try_move(1, 0, &self.board),
            Command::Rotate => self.active.try_rotate(&self.board),
            Command::SoftDrop => {
                if !self.active.try_move(0, 1, &self.board) {
                    self.lock_active();
                }
                true
            }
            Command::Quit => {
                info!(score = self.score, lines = self.lines, "quit requested");
                self.status = Status::Quit;
                true
            }
        }
    }

    /// Advance gravity to the clock reading `now`.
    ///
    /// When strictly more than the gravity interval has passed since the last
    /// step, the piece moves down one row or locks, and the timer restarts at
    /// `now` either way. Returns whether a gravity step happened.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.status.is_over() {
            return false;
        }
        if now.saturating_sub(self.last_gravity) <= self.gravity_interval {
            return false;
        }

        if self.active.try_move(0, 1, &self.board) {
            trace!(y = self.active.y, "gravity step");
        } else {
            self.lock_active();
        }
        self.last_gravity = now;
        true
    }

    /// Lock the active piece, clear lines, score, and bring in the next piece
    fn lock_active(&mut self) {
        let locked = self.active;
        self.board.lock(&locked.occupied_cells(), locked.kind);

        let lines_cleared = self.board.clear_completed_lines() as u32;
        let points = lines_cleared * POINTS_PER_LINE;
        self.lines += lines_cleared;
        self.score += points;

        let fresh = Piece::spawn(self.randomizer.next_kind());
        self.active = mem::replace(&mut self.next, fresh);

        let game_over = !self.active.try_move(0, 0, &self.board);
        if game_over {
            self.status = Status::GameOver;
        }

        debug!(
            kind = locked.kind.letter(),
            x = locked.x,
            y = locked.y,
            lines_cleared,
            score = self.score,
            "piece locked"
        );
        if game_over {
            info!(score = self.score, lines = self.lines, "game over");
        }

        self.last_event = Some(LockEvent {
            kind: locked.kind,
            lines_cleared,
            points,
            game_over,
        });
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }
        out.active = match self.status {
            Status::Playing => Some(ActiveSnapshot::from(self.active)),
            _ => None,
        };
        out.next = self.next.kind;
        out.score = self.score;
        out.lines = self.lines;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
