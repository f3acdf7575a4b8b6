use blockfall::core::{standard_entry, Engine, EngineConfig, EngineSnapshot};
use blockfall::term::{color_rgb, GameView, Viewport};
use blockfall::types::Color;

fn empty_snapshot() -> EngineSnapshot {
    EngineSnapshot {
        rows: 20,
        cols: 10,
        grid: vec![None; 200],
        ..EngineSnapshot::default()
    }
}

fn all_text(fb: &blockfall::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();

    // 10 columns at 2 chars and 20 rows at 1 char, plus the border.
    let fb = view.render(&empty_snapshot(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_two_chars_wide() {
    let mut snap = empty_snapshot();
    snap.grid[19 * 10] = Some(Color::Red);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let glyph = fb.get(x, y0).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, color_rgb(Color::Red));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_clips_active_cells_above_grid() {
    let config = EngineConfig::default().with_palette(standard_entry('O').into_iter().collect());
    let mut engine = Engine::new(config).unwrap();
    engine.try_move(0, -1);

    let fb = GameView::default().render(&engine.snapshot(), Viewport::new(22, 22));

    // Only the lower half of the O is visible, on grid row 0.
    assert_eq!(fb.get(9, 0).unwrap().ch, '─');
    assert_eq!(fb.get(9, 1).unwrap().ch, '█');
    assert_eq!(fb.get(9, 2).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = empty_snapshot();
    snap.score = 1200;
    snap.lines = 12;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let text = all_text(&fb);

    assert!(text.contains("SCORE"));
    assert!(text.contains("1200"));
    assert!(text.contains("LINES"));
    assert!(text.contains("12"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = empty_snapshot();
    let running = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!all_text(&running).contains("GAME OVER"));

    snap.game_over = true;
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("GAME OVER"));
    assert!(fb.row_text(12).contains("r: restart"));
}
