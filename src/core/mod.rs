//! Pure game logic with no dependencies on UI or I/O.
//!
//! Everything here is deterministic: randomness comes from a seeded
//! [`SimpleRng`] and time enters only as `Instant` parameters, so the whole
//! core runs under test without a terminal or a clock.

pub mod board;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod sink;

pub use board::{Board, MAX_CLEARED_ROWS};
pub use rng::SimpleRng;
pub use scoring::lock_score;
pub use session::{ActivePiece, FallTimer, GameSession};
pub use shapes::{offsets, random_kind, rotate_ccw, rotate_cw, CellOffset, ShapeOffsets};
pub use sink::GameSink;
