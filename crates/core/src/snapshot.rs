use crate::pieces::{Shape, Tetromino};
use crate::types::{
    GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_FALL_INTERVAL_MS, STARTING_LEVEL,
};

pub type BoardGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for PieceSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind(),
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl PieceSnapshot {
    /// Absolute board coordinates of every occupied cell.
    ///
    /// Coordinates past the `i8` range saturate, which keeps them off the board.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

/// Everything a renderer needs, copied out of the engine.
///
/// `board` holds locked cells only (0 empty, 1..=7 kind); `current` is drawn
/// on top of it by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub status: GameStatus,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub pieces_locked: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Board grid with the current piece composited in (rows >= 0 only).
    pub fn composited_board(&self) -> BoardGrid {
        let mut grid = self.board;
        let value = self.current.kind.cell_value();
        for (x, y) in self.current.cells() {
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                grid[y as usize][x as usize] = value;
            }
        }
        grid
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let placeholder = PieceSnapshot::from(Tetromino::new(PieceKind::I));
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: placeholder,
            next: placeholder,
            status: GameStatus::Playing,
            score: 0,
            level: STARTING_LEVEL,
            lines: 0,
            fall_interval_ms: INITIAL_FALL_INTERVAL_MS,
            pieces_locked: 0,
        }
    }
}
