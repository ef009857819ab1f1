//! Boundary contract between the core and the rendering/score collaborator.
//!
//! The core knows nothing about visual representation; it reports cell
//! coordinates and shape kinds through this trait and the shell decides what
//! they look like. All methods default to no-ops so pure-logic users (tests,
//! benches) can pass `()`.

use crate::types::{Cell, Coord, ShapeKind};

/// Receives render, score, and lifecycle events from a [`GameSession`].
///
/// [`GameSession`]: crate::core::GameSession
pub trait GameSink {
    /// The active piece was drawn at these absolute cells.
    fn piece_drawn(&mut self, cells: &[Coord; 4], kind: ShapeKind) {
        let _ = (cells, kind);
    }

    /// The active piece was erased from these absolute cells (it is about to
    /// be redrawn elsewhere).
    fn piece_erased(&mut self, cells: &[Coord; 4], kind: ShapeKind) {
        let _ = (cells, kind);
    }

    /// The active piece locked into the board at these cells.
    fn cells_locked(&mut self, cells: &[Coord; 4], kind: ShapeKind) {
        let _ = (cells, kind);
    }

    /// A cell's content changed while collapsing cleared rows.
    fn cell_retagged(&mut self, at: Coord, cell: Cell) {
        let _ = (at, cell);
    }

    /// The score changed (also fired for the reset to 0 at game start).
    fn score_changed(&mut self, score: u32) {
        let _ = score;
    }

    /// All occupancy was cleared at game start.
    fn board_reset(&mut self) {}

    /// The game ended; the final score was delivered by the last
    /// `score_changed`.
    fn game_ended(&mut self) {}
}

/// Headless sink for tests and benches.
impl GameSink for () {}
