//! Active piece module - the falling, player-controlled piece
//!
//! A piece goes spawned -> falling -> landed. Every attempted change is
//! validated with [`collides`] against a candidate matrix/position before it
//! is committed, so a rejected move or rotation leaves the piece untouched.
//!
//! # Wall kicks
//!
//! Rotation uses a single-axis kick search instead of a full kick table: when
//! the rotated matrix collides in place, the piece is shifted horizontally by
//! +1, -2, +3, -4, ... (each step relative to the previous attempt, so the
//! tried net offsets are +1, -1, +2, -2, ...) until a free spot is found. The
//! search gives up, and the rotation is abandoned, once the next step would
//! exceed the matrix width.

use serde::Serialize;

use crate::board::Board;
use crate::collision::collides;
use crate::shapes::PieceMatrix;
use crate::types::{Cell, PieceKind, Rotation};

/// The currently falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActivePiece {
    kind: PieceKind,
    rotation: Rotation,
    matrix: PieceMatrix,
    x: i32,
    y: i32,
}

impl ActivePiece {
    /// Create a piece of `kind` at the top of `board`, horizontally centered
    ///
    /// The caller must check [`ActivePiece::collides`] afterwards: a spawn
    /// that overlaps settled blocks means the game is over.
    pub fn spawn(kind: PieceKind, board: &Board) -> Self {
        let rotation = Rotation::North;
        let matrix = PieceMatrix::for_piece(kind, rotation);
        let x = board.width() as i32 / 2 - matrix.width() as i32 / 2;
        Self {
            kind,
            rotation,
            matrix,
            x,
            y: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Palette slot written into the board when this piece lands
    pub fn color(&self) -> Cell {
        self.kind.color_index()
    }

    pub fn matrix(&self) -> &PieceMatrix {
        &self.matrix
    }

    /// Top-left corner of the matrix in board coordinates
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Whether the piece overlaps walls, floor or settled cells where it is
    pub fn collides(&self, board: &Board) -> bool {
        collides(board, &self.matrix, self.x, self.y)
    }

    /// Shift horizontally by `dx`; a blocked shift is a no-op
    pub fn shift(&mut self, dx: i32, board: &Board) -> bool {
        if collides(board, &self.matrix, self.x + dx, self.y) {
            return false;
        }
        self.x += dx;
        true
    }

    /// Rotate one step, kicking sideways if needed
    ///
    /// Returns false and leaves rotation, matrix and position untouched when
    /// no kick offset fits.
    pub fn rotate(&mut self, clockwise: bool, board: &Board) -> bool {
        let next_rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        let candidate = PieceMatrix::for_piece(self.kind, next_rotation);
        let limit = candidate.width() as i32;

        let mut x = self.x;
        let mut offset: i32 = 1;
        while collides(board, &candidate, x, self.y) {
            x += offset;
            offset = -(offset + offset.signum());
            if offset > limit {
                return false;
            }
        }

        self.rotation = next_rotation;
        self.matrix = candidate;
        self.x = x;
        true
    }

    /// Move one row down
    ///
    /// Returns true if the piece could not move because it has landed; the
    /// position is unchanged in that case.
    pub fn drop_step(&mut self, board: &Board) -> bool {
        if collides(board, &self.matrix, self.x, self.y + 1) {
            return true;
        }
        self.y += 1;
        false
    }

    /// Row a hard drop would stop at, without moving the piece
    pub fn landing_y(&self, board: &Board) -> i32 {
        let mut y = self.y;
        while !collides(board, &self.matrix, self.x, y + 1) {
            y += 1;
        }
        y
    }

    /// Fall straight to the landing row; returns the rows fallen
    ///
    /// This does not merge the piece. The session lands it right after.
    pub fn hard_drop(&mut self, board: &Board) -> u32 {
        let target = self.landing_y(board);
        let distance = (target - self.y) as u32;
        self.y = target;
        distance
    }
}
