//! Pieces module - Tetromino shape matrices and naive rotation
//!
//! Shapes are small boolean matrices anchored at their top-left corner.
//! Rotation builds a new matrix (transpose, then reverse row order) and never
//! touches the canonical table. There are no wall kicks: callers test the
//! rotated shape at the unchanged position and reject it on collision.

use crate::rng::PieceSource;
use crate::types::{PieceKind, BOARD_WIDTH};

/// Offset of a single mino relative to the shape's top-left corner, as (column, row)
pub type MinoOffset = (i8, i8);

/// Largest matrix side any tetromino needs
pub const MAX_SHAPE_SIZE: usize = 4;

/// Canonical spawn matrices, in identity order (I, O, T, J, L, S, Z).
const CANONICAL: [&[&[u8]]; 7] = [
    &[&[1, 1, 1, 1]],
    &[&[1, 1], &[1, 1]],
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 1, 0], &[0, 1, 1]],
];

/// An immutable occupancy matrix tagged with the kind it was built from.
///
/// Cells outside `rows x cols` are always empty, so two shapes compare equal
/// exactly when their dimensions and patterns match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: PieceKind,
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// The spawn orientation of `kind`.
    pub fn canonical(kind: PieceKind) -> Self {
        Self::from_matrix(kind, CANONICAL[kind.index()])
    }

    /// Build a shape from rows of 0/1 values.
    ///
    /// Anything beyond 4x4 is cut off; non-zero means occupied.
    pub fn from_matrix(kind: PieceKind, matrix: &[&[u8]]) -> Self {
        let rows = matrix.len().min(MAX_SHAPE_SIZE);
        let cols = matrix
            .iter()
            .take(rows)
            .map(|row| row.len())
            .max()
            .unwrap_or(0)
            .min(MAX_SHAPE_SIZE);

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in matrix.iter().take(rows).enumerate() {
            for (c, &v) in row.iter().take(cols).enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            kind,
            rows: rows as u8,
            cols: cols as u8,
            cells,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Number of matrix rows (height in cells)
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of matrix columns (width in cells)
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the matrix cell at (row, col) is occupied. Out of range is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Occupied cells as (column, row) offsets, row-major.
    pub fn minos(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols)
                .filter(move |&c| self.cells[r as usize][c as usize])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Rotate 90° clockwise into a new shape.
    ///
    /// `rotated[new_row][new_col] = shape[rows - 1 - new_col][new_row]`,
    /// so the dimensions swap and the kind is preserved.
    pub fn rotated(&self) -> Shape {
        let rows = self.cols;
        let cols = self.rows;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for new_row in 0..rows as usize {
            for new_col in 0..cols as usize {
                cells[new_row][new_col] = self.cells[self.rows as usize - 1 - new_col][new_row];
            }
        }

        Shape {
            kind: self.kind,
            rows,
            cols,
            cells,
        }
    }
}

/// Column at which a shape of the given width spawns: centered, rounding left.
pub fn spawn_x(shape_cols: u8) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape_cols / 2) as i8
}

/// A shape positioned on the board.
///
/// `x`/`y` are the board column/row of the shape's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a piece of `kind` at its spawn position
    pub fn new(kind: PieceKind) -> Self {
        let shape = Shape::canonical(kind);
        Self {
            shape,
            x: spawn_x(shape.cols()),
            y: 0,
        }
    }

    /// Draw a kind from `source` and place it at the spawn position
    pub fn spawn<S: PieceSource + ?Sized>(source: &mut S) -> Self {
        Self::new(source.next_kind())
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }

    /// The shape this piece would have after one clockwise turn.
    ///
    /// Pure: the piece itself is left untouched.
    pub fn rotated(&self) -> Shape {
        self.shape.rotated()
    }

    /// Absolute board coordinates of every occupied cell.
    ///
    /// Coordinates past the `i8` range saturate, which keeps them off the board.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}
