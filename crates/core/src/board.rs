//! Board module - manages the arena grid
//!
//! The board is a fixed-size grid of cell values stored as a flat row-major
//! vector. Coordinates are `(x, y)` with `x` growing right and `y` growing
//! down; row 0 is the top.
//!
//! Settled content only changes in two ways: a landed piece is merged in, or
//! completed rows are removed.

use serde::Serialize;

use crate::piece::ActivePiece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Largest valid cell value (the seventh palette slot)
const MAX_CELL: Cell = 7;

/// The arena - `width` columns x `height` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Dimensions are fixed for its whole life.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    ///
    /// Returns false (and leaves the board untouched) if the position is out
    /// of bounds or `cell` is not a valid cell value.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if cell > MAX_CELL {
            return false;
        }
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(cell) if cell != EMPTY)
    }

    /// Whether a row exists and has no empty cell
    pub fn is_row_complete(&self, y: usize) -> bool {
        self.row(y)
            .map_or(false, |row| row.iter().all(|&cell| cell != EMPTY))
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks() panics on a zero chunk size
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write every filled cell of a piece into the board at its position
    ///
    /// The piece is expected to be at its resting position, which collision
    /// checks guarantee is in bounds. Cells that still sit above the top
    /// edge have nowhere to go and are dropped.
    pub fn merge(&mut self, piece: &ActivePiece) {
        let (px, py) = piece.position();
        for (x, y, cell) in piece.matrix().filled() {
            self.set(px + x, py + y, cell);
        }
    }

    /// Remove every complete row and return how many were removed
    ///
    /// Remaining rows keep their relative order and sink to the bottom; the
    /// same number of empty rows appear at the top. Non-contiguous complete
    /// rows are handled in the same pass (two-pointer compaction, no
    /// allocation).
    pub fn clear_completed_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut cleared = 0;
        let mut write_y = height;

        // Scan from bottom to top
        for read_y in (0..height).rev() {
            if self.is_row_complete(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        // Everything above the write cursor is now stale
        self.cells[..write_y * width].fill(EMPTY);

        cleared
    }

    /// Empty the whole board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
