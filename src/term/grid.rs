//! Render model fed by core events.
//!
//! [`CellGrid`] is the shell's mirror of the board: a flat grid of cell
//! kinds kept current purely by [`GameSink`] callbacks. The core pushes
//! every visual change (piece draws and erases, locks, collapse retags,
//! score updates) and the view reads the grid back each frame. The grid
//! never consults the board directly.

use crate::core::GameSink;
use crate::types::{Cell, Coord, GameConfig, ShapeKind};

#[derive(Debug, Clone)]
pub struct CellGrid {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
    score: u32,
    game_over: bool,
}

impl CellGrid {
    pub fn new(config: GameConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            cells: vec![None; config.width as usize * config.height as usize],
            score: 0,
            game_over: false,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell content, or `None` for coordinates outside the grid.
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    fn put(&mut self, (x, y): Coord, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = cell;
        }
    }
}

impl GameSink for CellGrid {
    fn piece_drawn(&mut self, cells: &[Coord; 4], kind: ShapeKind) {
        for &at in cells {
            self.put(at, Some(kind));
        }
    }

    fn piece_erased(&mut self, cells: &[Coord; 4], _kind: ShapeKind) {
        for &at in cells {
            self.put(at, None);
        }
    }

    fn cells_locked(&mut self, cells: &[Coord; 4], kind: ShapeKind) {
        for &at in cells {
            self.put(at, Some(kind));
        }
    }

    fn cell_retagged(&mut self, at: Coord, cell: Cell) {
        self.put(at, cell);
    }

    fn score_changed(&mut self, score: u32) {
        self.score = score;
    }

    fn board_reset(&mut self) {
        self.cells.fill(None);
        self.game_over = false;
    }

    fn game_ended(&mut self) {
        self.game_over = true;
    }
}
