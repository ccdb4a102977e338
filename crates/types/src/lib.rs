//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! from the engine, the terminal front-end, or any other adapter.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Gravity
//!
//! The fall interval starts at 500ms and shrinks by 50ms per level,
//! never dropping below 50ms:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 500ms |
//! | 2 | 450ms |
//! | 5 | 300ms |
//! | 10+ | 50ms |
//!
//! # Examples
//!
//! ```
//! use tetromino_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(2), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.cell_value(), 3);
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fall interval at level 1 (500ms per row)
pub const INITIAL_FALL_INTERVAL_MS: u32 = 500;

/// Lower bound for the fall interval (50ms per row)
pub const MIN_FALL_INTERVAL_MS: u32 = 50;

/// How much faster gravity gets with each level
pub const FALL_INTERVAL_STEP_MS: u32 = 50;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level of a fresh game
pub const STARTING_LEVEL: u32 = 1;

/// Line clear scoring table, indexed by lines cleared at once.
///
/// Points are multiplied by the current level. Triples are worth 500,
/// not the 400 the doubling pattern would suggest.
pub const LINE_SCORES: [u32; 5] = [0, 100, 200, 500, 1000];

/// Default frame duration for front-end loops (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// The seven tetromino piece kinds
///
/// The declaration order is the identity index used everywhere else:
/// I=0, O=1, T=2, J=3, L=4, S=5, Z=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in identity order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Zero-based identity index (0..=6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by its zero-based identity index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Value stored in exported board grids: `index + 1`, so 0 can mean empty.
    pub fn cell_value(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`PieceKind::cell_value`]. Returns `None` for 0 and out-of-range values.
    ///
    /// ```
    /// use tetromino_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_cell_value(0), None);
    /// assert_eq!(PieceKind::from_cell_value(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_cell_value(7), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_cell_value(8), None);
    /// ```
    pub fn from_cell_value(value: u8) -> Option<Self> {
        match value {
            0 => None,
            v => Self::from_index(v as usize - 1),
        }
    }

    /// Uppercase letter used by front-ends and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Game actions that a front-end can dispatch to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Drop piece to the lowest free position and lock it
    HardDrop,
    /// Start a fresh session
    Reset,
}

impl GameAction {
    /// camelCase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Reset => "reset",
        }
    }
}

/// Session state machine.
///
/// `GameOver` is sticky: only [`GameAction::Reset`] leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    GameOver,
}

impl GameStatus {
    pub fn is_game_over(self) -> bool {
        self == GameStatus::GameOver
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::GameOver => "game_over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants() {
        assert_eq!(INITIAL_FALL_INTERVAL_MS, 500);
        assert_eq!(MIN_FALL_INTERVAL_MS, 50);
        assert_eq!(FALL_INTERVAL_STEP_MS, 50);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(STARTING_LEVEL, 1);
        assert_eq!(LINE_SCORES, [0, 100, 200, 500, 1000]);
    }

    #[test]
    fn piece_kind_indices_follow_declaration_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i), Some(*kind));
            assert_eq!(PieceKind::from_cell_value(kind.cell_value()), Some(*kind));
        }
        assert_eq!(PieceKind::from_index(7), None);
    }

    #[test]
    fn status_defaults_to_playing() {
        assert_eq!(GameStatus::default(), GameStatus::Playing);
        assert!(!GameStatus::Playing.is_game_over());
        assert!(GameStatus::GameOver.is_game_over());
    }
}
