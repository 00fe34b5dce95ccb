use tui_wordgrid::core::{GameState, LetterGrid, Lexicon, RoundConfig};
use tui_wordgrid::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tui_wordgrid::types::{GameAction, GridPos};

fn state() -> GameState {
    let grid = LetterGrid::from_rows(&["CATSX", "ABCDE", "FGHIJ", "KLMNO", "PQRST"]).unwrap();
    GameState::with_grid(RoundConfig::default(), grid)
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_frame_corners() {
    let snap = state().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let layout = view.layout(5, 5, vp);
    let fb = view.render(&snap, vp);

    let right = layout.frame_x + layout.frame_w - 1;
    let bottom = layout.frame_y + layout.frame_h - 1;
    assert_eq!(fb.get(layout.frame_x, layout.frame_y).unwrap().ch, '╭');
    assert_eq!(fb.get(right, layout.frame_y).unwrap().ch, '╮');
    assert_eq!(fb.get(layout.frame_x, bottom).unwrap().ch, '╰');
    assert_eq!(fb.get(right, bottom).unwrap().ch, '╯');
}

#[test]
fn term_view_centers_letters_in_tiles() {
    let snap = state().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let layout = view.layout(5, 5, vp);
    let fb = view.render(&snap, vp);

    // Tiles are 5x3 with a one-column gutter; the letter sits at (2, 1) inside.
    assert_eq!(fb.get(layout.tiles_x + 2, layout.tiles_y + 1).unwrap().ch, 'C');
    assert_eq!(fb.get(layout.tiles_x + 6 + 2, layout.tiles_y + 1).unwrap().ch, 'A');
    assert_eq!(fb.get(layout.tiles_x + 2, layout.tiles_y + 3 + 1).unwrap().ch, 'A');
}

#[test]
fn term_view_marks_selection_order() {
    let lex = Lexicon::seed();
    let mut gs = state();
    gs.apply_action(GameAction::ActivateAt(GridPos::new(0, 0)), &lex);
    gs.apply_action(GameAction::ActivateAt(GridPos::new(0, 1)), &lex);

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(80, 24);
    let layout = view.layout(5, 5, vp);
    let fb = view.render(&gs.snapshot(), vp);

    assert_eq!(fb.get(layout.tiles_x, layout.tiles_y).unwrap().ch, '1');
    assert_eq!(fb.get(layout.tiles_x + 6, layout.tiles_y).unwrap().ch, '2');
    assert!(screen_text(&fb).contains("CA"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let lex = Lexicon::from_words(["cat"]);
    let mut gs = state();
    for col in 0..3 {
        gs.apply_action(GameAction::ActivateAt(GridPos::new(0, col)), &lex);
    }
    gs.apply_action(GameAction::Submit, &lex);

    let view = GameView::default();
    let text = screen_text(&view.render(&gs.snapshot(), Viewport::new(80, 24)));
    assert!(text.contains("TIME"));
    assert!(text.contains("03:00"));
    assert!(text.contains("SCORE"));
    assert!(text.contains("WORDS"));
    assert!(text.contains("+1 cat"));
    assert!(text.contains('●'));
}

#[test]
fn term_view_skips_panel_when_narrow() {
    let view = GameView::default();
    let fb = view.render(&state().snapshot(), Viewport::new(34, 24));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_keeps_help_line_without_panel() {
    let view = GameView::default();
    let vp = Viewport::new(40, 24);
    let layout = view.layout(5, 5, vp);
    let fb = view.render(&state().snapshot(), vp);

    assert!(!screen_text(&fb).contains("SCORE"));
    let help = fb.row_text(layout.frame_y + layout.frame_h);
    assert!(help.starts_with("space select"), "help row: {help:?}");
}

#[test]
fn term_view_shows_round_and_seed() {
    let mut gs = state();
    let view = GameView::default();
    let text = screen_text(&view.render(&gs.snapshot(), Viewport::new(80, 24)));
    assert!(text.contains("ROUND 1"));
    assert!(text.contains("SEED 1"));

    gs.restart();
    let snap = gs.snapshot();
    let text = screen_text(&view.render(&snap, Viewport::new(80, 24)));
    assert!(text.contains("ROUND 2"));
    assert!(text.contains(&format!("SEED {}", snap.seed)));
}

#[test]
fn term_view_shows_pause_overlay() {
    let lex = Lexicon::seed();
    let mut gs = state();
    gs.apply_action(GameAction::Pause, &lex);
    let fb = GameView::default().render(&gs.snapshot(), Viewport::new(80, 24));
    assert!(screen_text(&fb).contains("PAUSED"));
}

#[test]
fn hit_test_maps_tiles_and_ignores_gutters() {
    let snap = state().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let layout = view.layout(5, 5, vp);

    assert_eq!(
        view.hit_test(&snap, vp, layout.tiles_x, layout.tiles_y),
        Some(GridPos::new(0, 0))
    );
    assert_eq!(
        view.hit_test(&snap, vp, layout.tiles_x + 6 * 2 + 4, layout.tiles_y + 3 + 2),
        Some(GridPos::new(1, 2))
    );
    // Gutter between column 0 and column 1.
    assert_eq!(view.hit_test(&snap, vp, layout.tiles_x + 5, layout.tiles_y), None);
    // Border and outside.
    assert_eq!(view.hit_test(&snap, vp, layout.frame_x, layout.frame_y), None);
    assert_eq!(view.hit_test(&snap, vp, 79, 23), None);
}
