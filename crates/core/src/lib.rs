//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and the session state machine. It has
//! no dependencies on terminals or any other I/O; front-ends drive it by
//! calling commands and [`GameState::tick`] and read it back through
//! [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of locked cells, collision test, line clearing
//! - [`game_state`]: the session: current/next piece, score, level, gravity
//! - [`pieces`]: tetromino matrices and clockwise rotation
//! - [`rng`]: injectable piece sources (seeded random, scripted)
//! - [`scoring`]: line clear points, level and fall interval
//! - [`snapshot`]: plain-data copy of a session for renderers
//!
//! # Game Rules
//!
//! - Pieces are picked uniformly at random (no bag), one preview piece.
//! - Rotation is a plain clockwise matrix turn with no wall kicks.
//! - A piece locks as soon as gravity cannot move it down (no lock delay).
//! - Clearing 1/2/3/4 lines scores 100/200/500/1000 times the level.
//! - Every 10 lines the level goes up and gravity gets 50ms faster, to 50ms.
//!
//! # Example
//!
//! ```
//! use tetromino_core::{GameState, ScriptedSource};
//! use tetromino_types::{GameAction, PieceKind};
//!
//! let mut game = GameState::with_source(ScriptedSource::repeat(PieceKind::O));
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`] every frame with the elapsed milliseconds.
//! Gravity fires once the accumulated time reaches the fall interval
//! (500ms at level 1) and then starts counting from zero again.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetromino_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use pieces::{Shape, Tetromino};
pub use rng::{PieceSource, RandomSource, ScriptedSource};
pub use scoring::{calculate_level, calculate_line_score, calculate_score, fall_interval_ms, ScoreResult};
pub use snapshot::{BoardGrid, GameSnapshot, PieceSnapshot};
