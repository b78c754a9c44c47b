//! Shared types module - pure data shared by the engine and its front-ends
//!
//! Nothing in here carries game logic. The engine, the terminal view and the
//! input mapper all speak in these types.
//!
//! # Board Dimensions
//!
//! The default arena is 10 columns by 20 rows. Column 0 is on the left, row 0
//! is at the top. The dimensions are configurable per session but never change
//! once a board is built.
//!
//! # Cell Values
//!
//! A [`Cell`] is a plain `u8`:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `0` | empty |
//! | `1..=7` | settled block, colored with the palette slot of the piece that left it |
//!
//! # Timing Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_DROP_INTERVAL_MS` | 1000 | Gravity at level 1 |
//! | `MIN_DROP_INTERVAL_MS` | 50 | Gravity floor |
//! | `LEVEL_SPEED_STEP_MS` | 100 | Gravity gain per level |
//! | `LINES_PER_LEVEL` | 10 | Lines needed per level |
//! | `FRAME_MS` | 16 | Front-end frame budget |
//!
//! # Examples
//!
//! ```
//! use tetris_arena_types::{Command, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.color_index(), 1);
//! assert_eq!(PieceKind::from_color_index(1), Some(PieceKind::T));
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::from_index(5), Rotation::East);
//!
//! assert_eq!(Command::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const DEFAULT_DROP_INTERVAL_MS: u32 = 1000;

/// Floor for the gravity interval, however high the level climbs
pub const MIN_DROP_INTERVAL_MS: u32 = 50;

/// Gravity interval removed per level gained
pub const LEVEL_SPEED_STEP_MS: u32 = 100;

/// Lines that must be cleared to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Front-end frame budget in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Points for a soft-drop step (per row)
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points for a hard drop (per row fallen)
pub const HARD_DROP_POINTS: u32 = 2;

/// Line clear scoring table, indexed by the number of rows cleared at once.
///
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by the current level (which starts at 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A cell on the board or inside a piece matrix.
///
/// `0` is empty, `1..=7` is a piece color index (see [`PieceKind::color_index`]).
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// The seven piece types
///
/// Declaration order is the palette order: the color index of a kind is its
/// position in this enum plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    T,
    I,
    S,
    Z,
    L,
    O,
    J,
}

impl PieceKind {
    /// All kinds in palette order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::O,
        PieceKind::J,
    ];

    /// Fixed 1-based palette slot for this kind
    pub fn color_index(self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::I => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::L => 5,
            PieceKind::O => 6,
            PieceKind::J => 7,
        }
    }

    /// Inverse of [`PieceKind::color_index`]; `None` for `0` and anything above `7`
    pub fn from_color_index(cell: Cell) -> Option<Self> {
        match cell {
            1..=7 => Some(Self::ALL[cell as usize - 1]),
            _ => None,
        }
    }

    /// Zero-based index into per-kind tables
    pub fn index(self) -> usize {
        self.color_index() as usize - 1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::J => "j",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rotation states, one per pre-defined orientation matrix
///
/// - **North**: spawn orientation (index 0)
/// - **East**: one clockwise turn (index 1)
/// - **South**: two turns (index 2)
/// - **West**: one counter-clockwise turn (index 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index in `0..4`
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from any index, reduced modulo 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use tetris_arena_types::Rotation;
    ///
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// ```
    /// use tetris_arena_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// ```
    pub fn rotate_ccw(self) -> Self {
        // (index - 1 + 4) mod 4
        Self::from_index(self.index() + 3)
    }
}

/// Commands a driver can send to a game session
///
/// Keyboard input and any other controller map onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Drop piece one cell down (scored per step)
    SoftDrop,
    /// Drop piece to the lowest free position and land it
    HardDrop,
    /// Toggle pause state
    Pause,
    /// Start a fresh playthrough
    Reset,
}

impl Command {
    /// camelCase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::Pause => "pause",
            Command::Reset => "reset",
        }
    }

    /// Whether the command acts on the falling piece (as opposed to the session)
    pub fn is_gameplay(&self) -> bool {
        !matches!(self, Command::Pause | Command::Reset)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_declaration_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.color_index() as usize, i + 1);
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_color_index(kind.color_index()), Some(*kind));
        }
        assert_eq!(PieceKind::from_color_index(0), None);
        assert_eq!(PieceKind::from_color_index(8), None);
    }

    #[test]
    fn rotation_cycles_modulo_four() {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::North);

        assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
        assert_eq!(Rotation::South.rotate_ccw(), Rotation::East);
        assert_eq!(Rotation::from_index(7), Rotation::West);
    }

    #[test]
    fn only_pause_and_reset_are_session_commands() {
        assert!(Command::MoveLeft.is_gameplay());
        assert!(Command::HardDrop.is_gameplay());
        assert!(!Command::Pause.is_gameplay());
        assert!(!Command::Reset.is_gameplay());
    }

    #[test]
    fn default_timing_matches_classic_config() {
        assert_eq!(DEFAULT_DROP_INTERVAL_MS, 1000);
        assert_eq!(MIN_DROP_INTERVAL_MS, 50);
        assert_eq!(LEVEL_SPEED_STEP_MS, 100);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(LINE_SCORES, [0, 40, 100, 300, 1200]);
    }
}
