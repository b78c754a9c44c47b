//! Collision detection between a piece matrix and the board
//!
//! The board is bounded on the left, right and bottom but open above: a
//! filled cell with a negative `y` only collides if it is also outside the
//! side walls.

use crate::board::Board;
use crate::shapes::PieceMatrix;
use crate::types::EMPTY;

/// True if any filled cell of `matrix`, placed with its top-left corner at
/// `(x, y)`, lands outside the walls/floor or on an occupied board cell.
pub fn collides(board: &Board, matrix: &PieceMatrix, x: i32, y: i32) -> bool {
    matrix
        .filled()
        .any(|(mx, my, _)| cell_blocked(board, x + mx, y + my))
}

/// Whether a single board coordinate is unavailable to a piece cell
pub fn cell_blocked(board: &Board, x: i32, y: i32) -> bool {
    if x < 0 || x >= board.width() as i32 || y >= board.height() as i32 {
        return true;
    }
    if y < 0 {
        return false;
    }
    board.get(x, y).map_or(true, |cell| cell != EMPTY)
}
