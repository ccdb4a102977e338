//! Integration tests for whole game sessions

use tetromino::core::{GameState, PieceSource, RandomSource, ScriptedSource};
use tetromino::types::{GameAction, GameStatus, PieceKind, BOARD_HEIGHT};

fn drop_until_game_over<S: PieceSource>(state: &mut GameState<S>) -> u32 {
    let mut drops = 0;
    while !state.game_over() {
        assert!(state.hard_drop());
        drops += 1;
        assert!(drops <= 200, "game never ended");
    }
    drops
}

#[test]
fn test_fresh_session() {
    let state = GameState::new(12345);

    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.fall_interval_ms(), 500);
    assert_eq!(state.current().y, 0);
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(42);
    let mut b = GameState::new(42);

    for _ in 0..30 {
        assert_eq!(a.current().kind(), b.current().kind());
        assert_eq!(a.next().kind(), b.next().kind());
        a.apply_action(GameAction::MoveLeft);
        b.apply_action(GameAction::MoveLeft);
        a.apply_action(GameAction::HardDrop);
        b.apply_action(GameAction::HardDrop);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_hard_drops_end_in_game_over_without_clears() {
    let mut state = GameState::new(7);
    drop_until_game_over(&mut state);

    // Pieces never reach columns 0..=2 without moving, so no row fills.
    assert_eq!(state.lines(), 0);
    assert_eq!(state.score(), 0);
    assert_eq!(state.status(), GameStatus::GameOver);
}

#[test]
fn test_game_over_freezes_until_reset() {
    let mut state = GameState::with_source(ScriptedSource::repeat(PieceKind::O));
    let drops = drop_until_game_over(&mut state);
    // Stacked O pieces: ten fit in twenty rows, the eleventh spawn collides.
    assert_eq!(drops, BOARD_HEIGHT as u32 / 2);

    let before = state.snapshot();
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
    ] {
        assert!(!state.apply_action(action));
    }
    assert!(!state.tick(5_000));
    assert_eq!(state.snapshot(), before);

    assert!(state.apply_action(GameAction::Reset));
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.score(), 0);
    assert_eq!(state.board().filled_count(), 0);
    assert!(state.move_left());
}

#[test]
fn test_move_left_against_wall_is_idempotent() {
    let mut state = GameState::with_source(ScriptedSource::repeat(PieceKind::T));

    for _ in 0..20 {
        state.move_left();
    }
    assert_eq!(state.current().x, 0);
    assert!(!state.move_left());
    assert_eq!(state.current().x, 0);
}

#[test]
fn test_gravity_brings_piece_to_rest_and_locks() {
    let mut state = GameState::with_source(ScriptedSource::new(&[PieceKind::O, PieceKind::Z]));

    // O needs 18 gravity steps to reach the floor, then one more to lock.
    for _ in 0..18 {
        assert!(state.tick(500));
    }
    assert_eq!(state.current().y, 18);
    assert_eq!(state.pieces_locked(), 0);

    assert!(state.tick(500));
    assert_eq!(state.pieces_locked(), 1);
    assert_eq!(state.current().kind(), PieceKind::Z);
}

#[test]
fn test_small_ticks_accumulate() {
    let mut state = GameState::new(3);

    for _ in 0..31 {
        assert!(!state.tick(16));
    }
    // 31 * 16 = 496ms so far; the next frame crosses 500.
    assert!(state.tick(16));
    assert_eq!(state.current().y, 1);
}

#[test]
fn test_clearing_ten_lines_levels_up() {
    // One vertical I per column fills the bottom four rows at once.
    let mut state = GameState::with_source(ScriptedSource::repeat(PieceKind::I));
    let mut cleared_rounds = 0;

    while state.lines() < 10 {
        for column in 0..10 {
            state.rotate();
            while state.current().x > column {
                state.move_left();
            }
            while state.current().x < column {
                state.move_right();
            }
            state.hard_drop();
        }
        cleared_rounds += 1;
        assert!(cleared_rounds < 10);
    }

    // Three rounds of four lines, all scored at level 1 since the level only
    // changes after the third clear.
    assert_eq!(state.lines(), 12);
    assert_eq!(state.level(), 2);
    assert_eq!(state.fall_interval_ms(), 450);
    assert_eq!(state.score(), 3 * 1000);
    assert_eq!(state.board().filled_count(), 0);
    assert!(!state.game_over());
}

#[test]
fn test_random_source_is_injectable() {
    let mut state = GameState::with_source(RandomSource::new(99));
    assert_eq!(state.source().seed(), 99);
    state.reset();
    assert_eq!(state.source().seed(), 99);
}
