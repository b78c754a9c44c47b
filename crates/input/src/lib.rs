//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::Command`]s. There is no
//! input state here: key repeat comes from the terminal, and only movement and
//! soft drop honor it.

pub mod map;

pub use tetris_arena_types as types;

pub use map::{command_for_event, handle_key_event, is_repeatable, should_quit};
