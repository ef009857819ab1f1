//! Gridfall: a terminal falling-block puzzle game.
//!
//! The crate splits into a pure core and a thin terminal shell:
//!
//! - [`core`] holds the shape catalog, board, RNG, scoring, and the
//!   [`core::GameSession`] state machine. No I/O, no clock of its own.
//! - [`term`] renders through a [`term::CellGrid`] kept current by the
//!   session's [`core::GameSink`] events.
//! - [`input`] maps crossterm key events to [`types::GameCommand`]s.

pub mod core;
pub mod input;
pub mod term;
pub mod types;

pub use crate::core::{GameSession, GameSink};
pub use crate::types::{GameCommand, GameConfig, GameStatus, ShapeKind};
