//! Pieces tests - shape matrices, rotation and spawn placement

use tetromino::core::{pieces::spawn_x, Shape, Tetromino};
use tetromino::types::PieceKind;

fn matrix(shape: &Shape) -> Vec<Vec<u8>> {
    (0..shape.rows() as usize)
        .map(|r| {
            (0..shape.cols() as usize)
                .map(|c| shape.is_filled(r, c) as u8)
                .collect()
        })
        .collect()
}

#[test]
fn test_canonical_matrices() {
    let expected: [(PieceKind, Vec<Vec<u8>>); 7] = [
        (PieceKind::I, vec![vec![1, 1, 1, 1]]),
        (PieceKind::O, vec![vec![1, 1], vec![1, 1]]),
        (PieceKind::T, vec![vec![1, 1, 1], vec![0, 1, 0]]),
        (PieceKind::J, vec![vec![1, 1, 1], vec![1, 0, 0]]),
        (PieceKind::L, vec![vec![1, 1, 1], vec![0, 0, 1]]),
        (PieceKind::S, vec![vec![0, 1, 1], vec![1, 1, 0]]),
        (PieceKind::Z, vec![vec![1, 1, 0], vec![0, 1, 1]]),
    ];
    for (kind, m) in expected {
        assert_eq!(matrix(&Shape::canonical(kind)), m, "{:?}", kind);
    }
}

#[test]
fn test_four_rotations_return_to_start() {
    for kind in PieceKind::ALL {
        let start = Shape::canonical(kind);
        let mut shape = start;
        for _ in 0..4 {
            let next = shape.rotated();
            assert_eq!(next.rows(), shape.cols());
            assert_eq!(next.cols(), shape.rows());
            assert_eq!(next.minos().count(), 4);
            shape = next;
        }
        assert_eq!(shape, start, "{:?}", kind);
    }
}

#[test]
fn test_i_rotates_to_column() {
    let column = Shape::canonical(PieceKind::I).rotated();
    assert_eq!(matrix(&column), vec![vec![1], vec![1], vec![1], vec![1]]);
}

#[test]
fn test_l_rotation_clockwise() {
    // [[1,1,1],[0,0,1]] turned clockwise
    let rotated = Shape::canonical(PieceKind::L).rotated();
    assert_eq!(matrix(&rotated), vec![vec![0, 1], vec![0, 1], vec![1, 1]]);
}

#[test]
fn test_rotation_does_not_touch_canonical() {
    let _ = Shape::canonical(PieceKind::S).rotated();
    assert_eq!(
        matrix(&Shape::canonical(PieceKind::S)),
        vec![vec![0, 1, 1], vec![1, 1, 0]]
    );
}

#[test]
fn test_spawn_position() {
    assert_eq!(spawn_x(4), 3);
    assert_eq!(spawn_x(3), 4);
    assert_eq!(spawn_x(2), 4);

    for kind in PieceKind::ALL {
        let piece = Tetromino::new(kind);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.kind(), kind);
    }
}

#[test]
fn test_tetromino_rotated_is_pure() {
    let piece = Tetromino::new(PieceKind::J);
    let rotated = piece.rotated();
    assert_eq!(piece.shape, Shape::canonical(PieceKind::J));
    assert_eq!(rotated.rows(), 3);
    assert_eq!(rotated.kind(), PieceKind::J);
}
