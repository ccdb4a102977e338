//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. There is no
//! key-repeat handling here; the terminal's own autorepeat drives movement.

pub mod map;

pub use tetromino_types as types;

pub use map::{handle_key_event, should_quit};
