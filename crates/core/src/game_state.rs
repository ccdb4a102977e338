//! Game state module - manages the complete game session
//!
//! This module ties together board, pieces, piece source and scoring.
//! It owns the current and next piece, the gravity accumulator, and the
//! `Playing` / `GameOver` state machine.
//!
//! Every command is a no-op while the game is over, except [`GameState::reset`].

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::pieces::{Shape, Tetromino};
use crate::rng::{PieceSource, RandomSource};
use crate::scoring::{calculate_level, calculate_score, fall_interval_ms};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::*;
use crate::Board;

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState<S: PieceSource = RandomSource> {
    board: Board,
    current: Tetromino,
    next: Tetromino,
    source: S,
    status: GameStatus,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    /// Milliseconds accumulated since the last gravity step.
    gravity_timer_ms: u32,
    /// Pieces locked this session.
    pieces_locked: u32,
}

impl GameState<RandomSource> {
    /// Create a new game with uniformly random pieces from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_source(RandomSource::new(seed))
    }
}

impl Default for GameState<RandomSource> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game drawing pieces from `source`.
    ///
    /// The first draw becomes the current piece, the second the next piece.
    pub fn with_source(source: S) -> Self {
        let mut state = Self {
            board: Board::new(),
            current: Tetromino::new(PieceKind::I),
            next: Tetromino::new(PieceKind::I),
            source,
            status: GameStatus::Playing,
            score: 0,
            level: STARTING_LEVEL,
            lines: 0,
            fall_interval_ms: INITIAL_FALL_INTERVAL_MS,
            gravity_timer_ms: 0,
            pieces_locked: 0,
        };
        state.reset();
        state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status.is_game_over()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval in milliseconds
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn fall_interval(&self) -> Duration {
        Duration::from_millis(self.fall_interval_ms as u64)
    }

    pub fn gravity_timer_ms(&self) -> u32 {
        self.gravity_timer_ms
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn current(&self) -> &Tetromino {
        &self.current
    }

    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.current = PieceSnapshot::from(self.current);
        out.next = PieceSnapshot::from(self.next);
        out.status = self.status;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
        out.pieces_locked = self.pieces_locked;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Reinitialize the whole session and return to `Playing`.
    ///
    /// The piece source is kept and keeps its position in its sequence.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Tetromino::spawn(&mut self.source);
        self.next = Tetromino::spawn(&mut self.source);
        self.status = GameStatus::Playing;
        self.score = 0;
        self.lines = 0;
        self.level = calculate_level(0);
        self.fall_interval_ms = fall_interval_ms(self.level);
        self.gravity_timer_ms = 0;
        self.pieces_locked = 0;
        debug!(
            current = self.current.kind().as_str(),
            next = self.next.kind().as_str(),
            "session reset"
        );
    }

    /// Try to move the current piece by (dx, dy)
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over() {
            return false;
        }

        let x = self.current.x.saturating_add(dx);
        let y = self.current.y.saturating_add(dy);
        if self.board.collides(&self.current.shape, x, y) {
            return false;
        }

        self.current.x = x;
        self.current.y = y;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move the current piece one row down. Does not lock on failure.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate clockwise in place; rejected (no kicks) if the result collides.
    pub fn rotate(&mut self) -> bool {
        if self.game_over() {
            return false;
        }

        let rotated: Shape = self.current.rotated();
        if self
            .board
            .collides(&rotated, self.current.x, self.current.y)
        {
            return false;
        }

        self.current.shape = rotated;
        true
    }

    /// Drop the current piece as far as it goes and lock it immediately.
    ///
    /// Returns false only when the game is already over.
    pub fn hard_drop(&mut self) -> bool {
        if self.game_over() {
            return false;
        }

        let mut distance: u32 = 0;
        while self.soft_drop() {
            distance += 1;
        }
        trace!(distance, "hard drop");

        self.lock_piece();
        true
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Fires at most once per call: when the accumulator reaches the fall
    /// interval it resets to zero (surplus time is discarded) and the piece
    /// moves down one row, locking if it cannot. Returns whether it fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over() {
            return false;
        }

        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        if self.gravity_timer_ms < self.fall_interval_ms {
            return false;
        }
        self.gravity_timer_ms = 0;

        if !self.soft_drop() {
            self.lock_piece();
        } else {
            trace!(y = self.current.y, "gravity step");
        }
        true
    }

    /// Merge the current piece, clear lines, score, and bring in the next piece.
    ///
    /// The game ends when the promoted piece collides at its spawn position.
    fn lock_piece(&mut self) {
        self.board.merge(&self.current);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let cleared_rows = self.board.clear_full_rows();
        if !cleared_rows.is_empty() {
            self.apply_line_clear(cleared_rows.len());
            debug!(
                rows = ?cleared_rows.as_slice(),
                score = self.score,
                lines = self.lines,
                "lines cleared"
            );
        }

        let spawned = Tetromino::spawn(&mut self.source);
        self.current = std::mem::replace(&mut self.next, spawned);
        debug!(
            current = self.current.kind().as_str(),
            next = self.next.kind().as_str(),
            pieces_locked = self.pieces_locked,
            "piece locked"
        );

        if self
            .board
            .collides(&self.current.shape, self.current.x, self.current.y)
        {
            self.status = GameStatus::GameOver;
            info!(
                score = self.score,
                level = self.level,
                lines = self.lines,
                "game over"
            );
        }
    }

    fn apply_line_clear(&mut self, cleared: usize) {
        let previous_level = self.level;
        let result = calculate_score(cleared, self.level, self.lines);

        self.score = self.score.saturating_add(result.points);
        self.lines = result.lines;
        self.level = result.level;
        self.fall_interval_ms = result.fall_interval_ms;

        if result.leveled_up(previous_level) {
            info!(
                level = self.level,
                fall_interval_ms = self.fall_interval_ms,
                "level up"
            );
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Check if the current piece could move by (dx, dy)
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        !self.board.collides(
            &self.current.shape,
            self.current.x.saturating_add(dx),
            self.current.y.saturating_add(dy),
        )
    }
}
