//! Snapshot module - read-only views of a session
//!
//! Front-ends render and serialize these instead of borrowing engine state.

use serde::Serialize;

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::shapes::PieceMatrix;
use crate::types::{PieceKind, Rotation};

/// The falling piece: kind, orientation, colored matrix and top-left corner
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub matrix: PieceMatrix,
    pub x: i32,
    pub y: i32,
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        let (x, y) = value.position();
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            matrix: value.matrix().clone(),
            x,
            y,
        }
    }
}

/// Score, progression and flags of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SessionStats {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
}

/// Everything a front-end needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<ActiveSnapshot>,
    /// Row the active piece would land on
    pub ghost_y: Option<i32>,
    pub stats: SessionStats,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.stats.game_over && !self.stats.paused
    }
}
