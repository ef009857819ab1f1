//! Shared data types and configuration.
//!
//! Pure data with no external dependencies; everything else in the crate
//! builds on these.

use std::time::Duration;

/// Default board dimensions.
pub const BOARD_WIDTH: u8 = 12;
pub const BOARD_HEIGHT: u8 = 20;

/// Default gravity interval. Constant for the lifetime of one game.
pub const FALL_INTERVAL_MS: u64 = 250;

/// Fixed spawn origin for new pieces (board coordinates).
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = 0;

/// Side length of the local reference frame shape offsets live in.
pub const FRAME_SIZE: i8 = 4;

/// An absolute board cell coordinate (x, y), y = 0 at the top.
pub type Coord = (u8, u8);

/// A board cell: `Some(kind)` means taken by a locked piece of that shape.
pub type Cell = Option<ShapeKind>;

/// The five shapes of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    L,
    Z,
    T,
    S,
    I,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::L,
        ShapeKind::Z,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::I,
    ];
}

/// Lifecycle of one game session.
///
/// `Stopped` is reached via an explicit stop while running; it is not game
/// over, and the board is only reset on the next start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Running,
    Stopped,
    GameOver,
}

/// Discrete commands delivered by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    /// Start/stop toggle.
    ToggleRun,
}

/// Board dimensions and fall interval, supplied at session construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub fall_interval_ms: u64,
}

impl GameConfig {
    pub fn fall_interval(&self) -> Duration {
        Duration::from_millis(self.fall_interval_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            fall_interval_ms: FALL_INTERVAL_MS,
        }
    }
}
