//! Board state, collision checks, and the line-clear engine.
//!
//! The board is a width x height occupancy grid stored row-major in a flat
//! vector; each cell remembers which shape locked into it so collapsed rows
//! keep their visual identity. Coordinates: (x, y) with x growing rightward
//! and y growing downward; row 0 is the top.
//!
//! Out-of-range access through [`Board::cell`] / [`Board::is_taken`] is a
//! programming error and asserts. Callers gate every mutation behind
//! [`Board::can_place`], which bounds-checks first.

use arrayvec::ArrayVec;

use crate::core::shapes::ShapeOffsets;
use crate::types::{Cell, Coord, ShapeKind};

/// A piece has 4 cells, so at most 4 rows complete per lock.
pub const MAX_CLEARED_ROWS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Row-major cells, `y * width + x`.
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u8, y: u8) -> usize {
        assert!(
            x < self.width && y < self.height,
            "board access out of range: ({}, {})",
            x,
            y
        );
        y as usize * self.width as usize + x as usize
    }

    /// Get a cell. Asserts on out-of-range coordinates.
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        self.cells[self.idx(x, y)]
    }

    /// Whether a cell is occupied by a locked piece.
    pub fn is_taken(&self, x: u8, y: u8) -> bool {
        self.cell(x, y).is_some()
    }

    /// Mark the given absolute cells as taken by `kind`.
    pub fn set_taken(&mut self, cells: &[Coord], kind: ShapeKind) {
        for &(x, y) in cells {
            let i = self.idx(x, y);
            self.cells[i] = Some(kind);
        }
    }

    /// Clear all occupancy (game start).
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    pub fn row_is_full(&self, y: u8) -> bool {
        let start = self.idx(0, y);
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Test whether a shape can legally sit at the given origin.
    ///
    /// Legal iff every cell lands inside the board and on an empty cell.
    /// Pure; called before every attempted move, rotation, or descent.
    pub fn can_place(&self, shape: &ShapeOffsets, origin_x: i8, origin_y: i8) -> bool {
        shape.iter().all(|&(dx, dy)| {
            let x = origin_x + dx;
            let y = origin_y + dy;
            x >= 0
                && x < self.width as i8
                && y >= 0
                && y < self.height as i8
                && !self.is_taken(x as u8, y as u8)
        })
    }

    /// Row indices that are completely full, ascending, top to bottom.
    pub fn completed_rows(&self) -> ArrayVec<u8, MAX_CLEARED_ROWS> {
        let mut rows = ArrayVec::new();
        for y in 0..self.height {
            if self.row_is_full(y) {
                rows.push(y);
            }
        }
        rows
    }

    /// Remove the given rows and compact the rest downward.
    ///
    /// Walks rows bottom-to-top with a write cursor: every surviving row is
    /// copied down into the next free slot (preserving relative order and
    /// cell identity), and the vacated rows at the top are blanked. A no-op
    /// for an empty `completed` list.
    pub fn collapse(&mut self, completed: &[u8]) {
        if completed.is_empty() {
            return;
        }

        // One past the last written row.
        let mut write_y = self.height;
        for read_y in (0..self.height).rev() {
            if completed.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                self.copy_row(read_y, write_y);
            }
        }

        for y in 0..write_y {
            self.clear_row(y);
        }
    }

    fn copy_row(&mut self, src: u8, dst: u8) {
        let w = self.width as usize;
        let src_start = src as usize * w;
        let dst_start = dst as usize * w;
        self.cells.copy_within(src_start..src_start + w, dst_start);
    }

    fn clear_row(&mut self, y: u8) {
        let start = self.idx(0, y);
        let end = start + self.width as usize;
        self.cells[start..end].fill(None);
    }

    /// Fill an entire row, leaving out the columns in `gaps`.
    #[cfg(test)]
    pub fn fill_row(&mut self, y: u8, kind: ShapeKind, gaps: &[u8]) {
        for x in 0..self.width {
            if !gaps.contains(&x) {
                let i = self.idx(x, y);
                self.cells[i] = Some(kind);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let board = Board::new(12, 20);
        assert_eq!(board.idx(0, 0), 0);
        assert_eq!(board.idx(11, 0), 11);
        assert_eq!(board.idx(0, 1), 12);
        assert_eq!(board.idx(11, 19), 239);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_access_asserts() {
        let board = Board::new(12, 20);
        board.cell(12, 0);
    }

    #[test]
    fn set_taken_records_kind() {
        let mut board = Board::new(12, 20);
        board.set_taken(&[(3, 5), (4, 5)], ShapeKind::T);
        assert_eq!(board.cell(3, 5), Some(ShapeKind::T));
        assert_eq!(board.cell(4, 5), Some(ShapeKind::T));
        assert!(board.is_taken(3, 5));
        assert!(!board.is_taken(5, 5));
    }

    #[test]
    fn reset_clears_everything() {
        let mut board = Board::new(12, 20);
        board.fill_row(19, ShapeKind::I, &[]);
        board.reset();
        for x in 0..12 {
            assert!(!board.is_taken(x, 19));
        }
    }
}
