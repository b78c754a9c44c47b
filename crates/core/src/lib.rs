//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and no I/O. Rendering and input
//! live in sibling crates and only talk to the engine through [`GameSession`]
//! commands and snapshots.
//!
//! - **Deterministic**: the piece sequence comes from an injected random
//!   source, so a fixed seed replays the same game
//! - **Headless**: no clock, no terminal, no global state; the caller feeds
//!   elapsed time into [`GameSession::tick`]
//! - **Infallible**: blocked moves, landings and game over are return values,
//!   never errors
//!
//! # Module Structure
//!
//! - [`shapes`]: rotation matrices for the seven kinds
//! - [`bag`]: 7-bag piece generator
//! - [`board`]: the arena grid, merging and row clearing
//! - [`collision`]: matrix-vs-board overlap test
//! - [`piece`]: the falling piece, with a single-axis wall kick
//! - [`scoring`]: line clear and drop points, levels and gravity pacing
//! - [`config`]: session configuration and its validation
//! - [`session`]: one playthrough tying everything together
//! - [`snapshot`]: read-only views for front-ends
//!
//! # Game Rules
//!
//! - Line clears score 40 / 100 / 300 / 1200 times the level for 1 to 4 rows
//! - Soft drop scores 1 point per row, hard drop 2 points per row
//! - Every 10 lines the level rises and gravity speeds up by 100ms, down to 50ms
//! - A piece that cannot spawn ends the game
//!
//! # Example
//!
//! ```
//! use tetris_arena_core::{GameSession, SessionConfig};
//! use tetris_arena_types::Command;
//!
//! let mut game = GameSession::new(SessionConfig::default(), 12345);
//! game.start();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::RotateCw);
//! let outcome = game.apply(Command::HardDrop);
//!
//! assert!(outcome.landing().is_some());
//! assert!(game.score() > 0); // hard drop awards points
//! ```

pub mod bag;
pub mod board;
pub mod collision;
pub mod config;
pub mod piece;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use tetris_arena_types as types;

// Re-export commonly used types for convenience
pub use bag::PieceBag;
pub use board::Board;
pub use collision::collides;
pub use config::{ConfigError, SessionConfig, MAX_BOARD_SIDE};
pub use piece::ActivePiece;
pub use scoring::{drop_interval_ms, drop_points, level_for_lines, line_clear_points};
pub use session::{ActionOutcome, GameSession, Landing};
pub use shapes::{get_shape, PieceMatrix};
pub use snapshot::{ActiveSnapshot, GameSnapshot, SessionStats};
