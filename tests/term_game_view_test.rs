use tetromino::core::{GameSnapshot, GameState, ScriptedSource};
use tetromino::term::{piece_color, AnchorY, FrameBuffer, GameView, Viewport};
use tetromino::types::{GameStatus, PieceKind};

fn snapshot_of(kinds: &[PieceKind]) -> GameSnapshot {
    GameState::with_source(ScriptedSource::new(kinds)).snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snapshot_of(&[PieceKind::T]);
    let view = GameView::default();

    // 10x20 cells, 2 columns each, plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = snapshot_of(&[PieceKind::T]);
    snap.board[19][0] = PieceKind::I.cell_value();

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(22, 22));

    let (x0, y0) = view.cell_origin(Viewport::new(22, 22), 0, 19);
    assert_eq!((x0, y0), (1, 20));
    for dx in 0..2 {
        let cell = fb.get(x0 + dx, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(PieceKind::I));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_current_piece_over_empty_cells() {
    let snap = snapshot_of(&[PieceKind::O]);
    let view = GameView::default();
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    // O spawns at x=4..5, y=0..1.
    for (x, y) in [(4, 0), (5, 0), (4, 1), (5, 1)] {
        let (px, py) = view.cell_origin(vp, x, y);
        let cell = fb.get(px, py).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(PieceKind::O));
    }
    let (px, py) = view.cell_origin(vp, 3, 0);
    assert_eq!(fb.get(px, py).unwrap().ch, '·');
}

#[test]
fn term_view_skips_piece_rows_above_the_board() {
    let mut snap = snapshot_of(&[PieceKind::O]);
    snap.current.y = -1;

    let view = GameView::default();
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    let (px, py) = view.cell_origin(vp, 4, 0);
    assert_eq!(fb.get(px, py).unwrap().ch, '█');
    let (px, py) = view.cell_origin(vp, 4, 1);
    assert_eq!(fb.get(px, py).unwrap().ch, '·');
    // The border row is untouched.
    assert_eq!(fb.get(px, 0).unwrap().ch, '─');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = snapshot_of(&[PieceKind::T]);
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(60, 22));

    for text in ["SCORE", "1234", "LEVEL", "LINES", "NEXT", "CONTROLS", "hard drop"] {
        assert!(fb.contains_text(text), "missing {text}");
    }
}

#[test]
fn term_view_omits_side_panel_on_narrow_viewports() {
    let snap = snapshot_of(&[PieceKind::T]);
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!fb.contains_text("SCORE"));
}

#[test]
fn term_view_draws_next_piece_shape() {
    let snap = snapshot_of(&[PieceKind::O, PieceKind::T]);
    assert_eq!(snap.next.kind, PieceKind::T);

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(60, 22));

    // Frame at x=19, panel two columns right of it: x=43.
    // SCORE/LEVEL/LINES take rows 0..=8, NEXT label row 9, shape from row 10.
    let panel_x = 43;
    assert!(fb.row_text(9).trim_end().ends_with("NEXT"));

    let tee = fb.get(panel_x, 10).unwrap();
    assert_eq!(tee.ch, '█');
    assert_eq!(tee.style.fg, piece_color(PieceKind::T));
    assert_eq!(fb.get(panel_x + 5, 10).unwrap().ch, '█');
    assert_eq!(fb.get(panel_x, 11).unwrap().ch, ' ');
    assert_eq!(fb.get(panel_x + 2, 11).unwrap().ch, '█');
}

#[test]
fn term_view_shows_game_over_overlay_with_final_score() {
    let mut snap = snapshot_of(&[PieceKind::T]);
    snap.status = GameStatus::GameOver;
    snap.score = 4200;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    assert!(fb.contains_text("GAME OVER"));
    assert!(fb.contains_text("Score: 4200"));
    assert!(fb.contains_text("Press R to restart"));
}

#[test]
fn term_view_has_no_overlay_while_playing() {
    let snap = snapshot_of(&[PieceKind::T]);
    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    assert!(!fb.contains_text("GAME OVER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = snapshot_of(&[PieceKind::T]);
    let view = GameView::default();

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    let fb = view.render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = snapshot_of(&[PieceKind::T]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_resizes_reused_buffer() {
    let snap = snapshot_of(&[PieceKind::T]);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(10, 10);

    view.render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));

    let fresh = view.render(&snap, Viewport::new(40, 24));
    assert_eq!(fb, fresh);
}
