//! Terminal rendering: framebuffer, render model, view, and renderer.

pub mod fb;
pub mod game_view;
pub mod grid;
pub mod renderer;

pub use game_view::{GameView, Viewport};
pub use grid::CellGrid;
pub use renderer::TerminalRenderer;
