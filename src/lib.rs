//! Tetromino (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, integration
//! tests and benches can use `tetromino::{core,input,term,types}`.

pub use tetromino_core as core;
pub use tetromino_input as input;
pub use tetromino_term as term;
pub use tetromino_types as types;
