//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer: [`GameView`] paints a
//! [`core::GameSnapshot`] into a [`FrameBuffer`] of styled characters, and
//! [`TerminalRenderer`] flushes that buffer to a real terminal through
//! crossterm, emitting only the cells that changed since the last frame.
//!
//! Board cells are drawn two characters wide so they look roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetromino_core as core;
pub use tetromino_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
