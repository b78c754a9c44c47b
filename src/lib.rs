//! Tetris Arena (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof
//! (`tetris_arena::{core, input, term, types}`) and carries the run
//! configuration used by the terminal binary.

pub mod cli;

pub use tetris_arena_core as core;
pub use tetris_arena_input as input;
pub use tetris_arena_term as term;
pub use tetris_arena_types as types;
