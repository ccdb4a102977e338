//! Board module - manages the grid of locked cells
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that locked there. It never contains the falling piece; renderers
//! composite that on top of a snapshot.
//!
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).

use arrayvec::ArrayVec;

use crate::pieces::{Shape, Tetromino};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one clear, top to bottom
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Whether `shape` placed with its top-left corner at (x, y) is illegal.
    ///
    /// A mino collides when its column is outside the board, its row is at or
    /// below the bottom edge, or it overlaps a locked cell. Rows above the top
    /// edge (y < 0) never collide with content. Any `x`/`y` is accepted.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.minos().any(|(dx, dy)| {
            let px = x as i16 + dx as i16;
            let py = y as i16 + dy as i16;
            if px < 0 || px >= BOARD_WIDTH as i16 || py >= BOARD_HEIGHT as i16 {
                return true;
            }
            py >= 0 && self.is_occupied(px as i8, py as i8)
        })
    }

    /// Write the piece's kind into every cell it covers.
    ///
    /// Minos above the top edge are dropped; the engine detects the resulting
    /// overflow through the spawn check, not here.
    pub fn merge(&mut self, piece: &Tetromino) {
        let kind = piece.kind();
        for (px, py) in piece.cells() {
            if py < 0 {
                continue;
            }
            self.set(px, py, Some(kind));
        }
    }

    /// Remove every full row at once and return their indices (top to bottom).
    ///
    /// Surviving rows keep their relative order and slide down; one empty row
    /// enters at the top per removed row. Two-pointer compaction, no allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the vacated rows at the top
        self.cells[..write_y * width].fill(None);

        cleared_rows.reverse();
        cleared_rows
    }

    /// Remove every full row and return how many were removed.
    pub fn clear_full_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Export the grid as identity values (0 empty, 1..=7 piece kind).
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * width + x].map_or(0, |k| k.cell_value());
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill every cell of row `y` with `cell`. Out-of-range rows are ignored.
    pub fn fill_row(&mut self, y: usize, cell: Cell) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize].fill(cell);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
