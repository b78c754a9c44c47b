//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: [`GameView`] turns an engine
//! snapshot into a [`FrameBuffer`] of styled glyphs, and [`TerminalRenderer`]
//! flushes that framebuffer to the terminal. No widget toolkit, no layout
//! engine; each board cell is drawn 2 columns wide to keep it square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_arena_core as core;
pub use tetris_arena_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{cell_color, AnchorY, GameView, Viewport, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
