use tetris_arena::core::{GameSession, SessionConfig};
use tetris_arena::term::{cell_color, AnchorY, FrameBuffer, GameView, Viewport};
use tetris_arena::types::PieceKind;

fn idle() -> GameSession {
    GameSession::new(SessionConfig::default(), 1)
}

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = idle().snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_as_two_chars_wide() {
    let mut session = idle();
    session.board_mut().set(0, 19, PieceKind::I.color_index());
    let fb = GameView::default().render(&session.snapshot(), Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    let left = fb.get(x0, y0).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(Some(left.style.fg), cell_color(PieceKind::I.color_index()));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut session = idle();
    session.start();
    session.on_lines_cleared(4);
    let fb = GameView::default().render(&session.snapshot(), Viewport::new(60, 22));

    let text = all_text(&fb);
    assert!(text.contains("SCORE"));
    assert!(text.contains("1200"));
    assert!(text.contains("LINES"));
    assert!(text.contains("SPEED"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let fb = GameView::default().render(&idle().snapshot(), Viewport::new(30, 22));
    assert!(!all_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let fb = GameView::default().render(&idle().snapshot(), Viewport::new(22, 30));
    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&idle().snapshot(), Viewport::new(22, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_overlays() {
    let mut session = idle();
    session.start();
    session.pause();
    let fb = GameView::default().render(&session.snapshot(), Viewport::new(22, 22));
    assert!(all_text(&fb).contains("PAUSED"));

    session.resume();
    session.declare_game_over();
    let fb = GameView::default().render(&session.snapshot(), Viewport::new(22, 22));
    assert!(all_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_render_into_reuses_buffer_across_sizes() {
    let snap = idle().snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    view.render_into(&snap, Viewport::new(22, 22), &mut fb);
    assert_eq!(fb, view.render(&snap, Viewport::new(22, 22)));
}
