//! Game session: the state machine driving spawn, fall, lock, clear, respawn.
//!
//! [`GameSession`] owns every piece of mutable game state (board, active
//! piece, score, status, timer, RNG) and exposes only command handling and
//! timer polling. Time is injected as `Instant` parameters, so the whole
//! machine is deterministic under test.

use std::time::{Duration, Instant};

use crate::core::board::Board;
use crate::core::rng::SimpleRng;
use crate::core::scoring::lock_score;
use crate::core::shapes::{self, ShapeOffsets};
use crate::core::sink::GameSink;
use crate::types::{Coord, GameCommand, GameConfig, GameStatus, ShapeKind, SPAWN_X, SPAWN_Y};

/// The single falling piece. Exactly one exists while a game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    /// Current (post-rotation) cell offsets in the 4x4 frame.
    pub offsets: ShapeOffsets,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Absolute board cells. Only meaningful while the placement is legal
    /// (every caller validates through `can_place` first).
    pub fn cells(&self) -> [Coord; 4] {
        self.offsets
            .map(|(dx, dy)| ((self.x + dx) as u8, (self.y + dy) as u8))
    }
}

/// Deadline-based gravity scheduler.
///
/// Armed on start and after every fall tick; cancelled on stop and on game
/// over. A cancelled timer can never fire, which is what makes a stale tick
/// after `stop()` impossible.
#[derive(Debug, Clone)]
pub struct FallTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl FallTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if it has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// One game's worth of state, plus the sink it reports to.
pub struct GameSession<S: GameSink> {
    config: GameConfig,
    board: Board,
    active: Option<ActivePiece>,
    score: u32,
    status: GameStatus,
    timer: FallTimer,
    rng: SimpleRng,
    sink: S,
}

impl<S: GameSink> GameSession<S> {
    pub fn new(config: GameConfig, seed: u32, sink: S) -> Self {
        Self {
            board: Board::new(config.width, config.height),
            active: None,
            score: 0,
            status: GameStatus::NotStarted,
            timer: FallTimer::new(config.fall_interval()),
            rng: SimpleRng::new(seed),
            config,
            sink,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// When the next fall tick is due, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Dispatch an input command.
    ///
    /// Directional and rotate commands are silently ignored unless the game
    /// is running; an illegal move is a no-op, not an error.
    pub fn handle(&mut self, cmd: GameCommand, now: Instant) {
        match cmd {
            GameCommand::ToggleRun => {
                if self.status == GameStatus::Running {
                    self.stop();
                } else {
                    self.start(now);
                }
            }
            _ if self.status != GameStatus::Running => {}
            GameCommand::MoveLeft => {
                self.try_shift(-1, 0);
            }
            GameCommand::MoveRight => {
                self.try_shift(1, 0);
            }
            GameCommand::SoftDrop => {
                self.try_shift(0, 1);
            }
            GameCommand::Rotate => {
                self.try_rotate();
            }
        }
    }

    /// Begin a fresh game. Valid from any non-running state.
    pub fn start(&mut self, now: Instant) {
        if self.status == GameStatus::Running {
            return;
        }
        self.board.reset();
        self.sink.board_reset();
        self.score = 0;
        self.sink.score_changed(0);
        self.status = GameStatus::Running;
        self.spawn(now);
    }

    /// Stop a running game without ending it.
    ///
    /// Cancels the pending fall tick; the board is left as-is and fully
    /// reinitialized by the next `start`.
    pub fn stop(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        self.timer.cancel();
        self.status = GameStatus::Stopped;
    }

    /// Fire the fall tick if its deadline has passed.
    ///
    /// Returns whether a tick ran. Guarded on `Running` in addition to the
    /// timer so a stale deadline can never advance a stopped game.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        if !self.timer.fire_if_due(now) {
            return false;
        }
        self.fall_tick(now);
        true
    }

    fn fall_tick(&mut self, now: Instant) {
        let Some(piece) = self.active else {
            return;
        };
        if self.board.can_place(&piece.offsets, piece.x, piece.y + 1) {
            self.sink.piece_erased(&piece.cells(), piece.kind);
            let moved = ActivePiece {
                y: piece.y + 1,
                ..piece
            };
            self.sink.piece_drawn(&moved.cells(), moved.kind);
            self.active = Some(moved);
            self.timer.schedule(now);
        } else {
            self.lock_and_respawn(now);
        }
    }

    fn lock_and_respawn(&mut self, now: Instant) {
        let Some(piece) = self.active.take() else {
            return;
        };
        let cells = piece.cells();
        self.sink.cells_locked(&cells, piece.kind);
        self.board.set_taken(&cells, piece.kind);

        let completed = self.board.completed_rows();
        self.score += lock_score(completed.len());
        if let Some(&lowest) = completed.last() {
            self.board.collapse(&completed);
            self.retag_rows(lowest);
        }
        self.sink.score_changed(self.score);

        self.spawn(now);
    }

    /// Report post-collapse cell identity for rows 0..=lowest.
    ///
    /// Rows below the lowest cleared row cannot have changed: collapse only
    /// shifts rows downward into cleared slots.
    fn retag_rows(&mut self, lowest: u8) {
        for y in 0..=lowest {
            for x in 0..self.board.width() {
                self.sink.cell_retagged((x, y), self.board.cell(x, y));
            }
        }
    }

    fn spawn(&mut self, now: Instant) {
        let kind = shapes::random_kind(&mut self.rng);
        let piece = ActivePiece {
            kind,
            offsets: shapes::offsets(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        };
        // Drawn before the legality check, so a blocked spawn still shows
        // the colliding piece when the game ends.
        self.sink.piece_drawn(&piece.cells(), piece.kind);
        self.active = Some(piece);
        if self.board.can_place(&piece.offsets, piece.x, piece.y) {
            self.timer.schedule(now);
        } else {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        self.timer.cancel();
        self.status = GameStatus::GameOver;
        self.sink.game_ended();
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        if !self.board.can_place(&piece.offsets, piece.x + dx, piece.y + dy) {
            return false;
        }
        self.sink.piece_erased(&piece.cells(), piece.kind);
        let moved = ActivePiece {
            x: piece.x + dx,
            y: piece.y + dy,
            ..piece
        };
        self.sink.piece_drawn(&moved.cells(), moved.kind);
        self.active = Some(moved);
        true
    }

    fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let rotated = shapes::rotate_cw(piece.offsets);
        if !self.board.can_place(&rotated, piece.x, piece.y) {
            return false;
        }
        self.sink.piece_erased(&piece.cells(), piece.kind);
        let turned = ActivePiece {
            offsets: rotated,
            ..piece
        };
        self.sink.piece_drawn(&turned.cells(), turned.kind);
        self.active = Some(turned);
        true
    }
}
