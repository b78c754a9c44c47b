//! Shapes module - per-kind rotation matrices
//!
//! Each kind has four orientation grids of 0/1 flags. The grids are square
//! boxes (2x2 for O, 4x4 for I, 3x3 for the rest) so a rotation never changes
//! the matrix footprint. [`PieceMatrix`] is the recolored, owned form a piece
//! carries around.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{Cell, PieceKind, Rotation, EMPTY};

/// Largest matrix side (the I piece box)
pub const MAX_SPAN: usize = 4;

/// One orientation as rows of 0/1 flags
pub type ShapeGrid = &'static [&'static [u8]];

const T_SHAPES: [ShapeGrid; 4] = [
    &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]],
    &[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]],
];

const I_SHAPES: [ShapeGrid; 4] = [
    &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
    &[&[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0]],
    &[&[0, 0, 0, 0], &[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0]],
    &[&[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0]],
];

const S_SHAPES: [ShapeGrid; 4] = [
    &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 1], &[0, 0, 1]],
    &[&[0, 0, 0], &[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0, 0], &[1, 1, 0], &[0, 1, 0]],
];

const Z_SHAPES: [ShapeGrid; 4] = [
    &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
    &[&[0, 0, 1], &[0, 1, 1], &[0, 1, 0]],
    &[&[0, 0, 0], &[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1, 0], &[1, 1, 0], &[1, 0, 0]],
];

const L_SHAPES: [ShapeGrid; 4] = [
    &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]],
    &[&[0, 0, 0], &[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1, 0], &[0, 1, 0], &[0, 1, 0]],
];

// O looks the same in every orientation.
const O_SHAPES: [ShapeGrid; 4] = [
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
];

const J_SHAPES: [ShapeGrid; 4] = [
    &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 1], &[0, 1, 0], &[0, 1, 0]],
    &[&[0, 0, 0], &[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]],
];

/// All four orientation grids for a kind, indexed by rotation index
pub fn shapes(kind: PieceKind) -> &'static [ShapeGrid; 4] {
    match kind {
        PieceKind::T => &T_SHAPES,
        PieceKind::I => &I_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::L => &L_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::J => &J_SHAPES,
    }
}

/// Orientation grid for a kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> ShapeGrid {
    shapes(kind)[rotation.index()]
}

/// A small grid of cell values describing one oriented, colored piece
///
/// Every row has the same length. Filled cells hold the piece's color index,
/// everything else is [`EMPTY`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PieceMatrix {
    rows: ArrayVec<ArrayVec<Cell, MAX_SPAN>, MAX_SPAN>,
}

impl PieceMatrix {
    /// Build a matrix from a 0/1 grid, writing `color` into every filled slot
    pub fn from_grid(grid: ShapeGrid, color: Cell) -> Self {
        let rows = grid
            .iter()
            .take(MAX_SPAN)
            .map(|row| {
                row.iter()
                    .take(MAX_SPAN)
                    .map(|&flag| if flag != 0 { color } else { EMPTY })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// The matrix for `kind` at `rotation`, recolored to the kind's palette slot
    pub fn for_piece(kind: PieceKind, rotation: Rotation) -> Self {
        Self::from_grid(get_shape(kind, rotation), kind.color_index())
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell at local coordinates; out-of-range reads as empty
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(EMPTY)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Filled cells as `(x, y, value)` in local coordinates, row-major
    pub fn filled(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| **cell != EMPTY)
                .map(move |(x, &cell)| (x as i32, y as i32, cell))
        })
    }
}
