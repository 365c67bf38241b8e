use tui_merge::core::{GridState, PlaySession, SessionConfig, SimpleRng};
use tui_merge::term::{encode_frame_into, AnchorY, GameView, SessionView, Viewport};
use tui_merge::types::Tile;

fn session(rows: &[Vec<Tile>]) -> PlaySession {
    let config = SessionConfig::builder()
        .size(rows.len(), rows[0].len())
        .build()
        .unwrap();
    let grid = GridState::from_rows(rows, 0).unwrap();
    PlaySession::from_grid(config, grid, SimpleRng::new(1)).unwrap()
}

fn compact_view() -> GameView {
    GameView::new(2, 1).with_anchor_y(AnchorY::Top)
}

#[test]
fn term_view_renders_border_corners() {
    let s = session(&[vec![0; 4], vec![0; 4], vec![0; 4], vec![0; 4]]);

    // 4 tiles * 2 columns + border => 10 wide; 4 rows + border => 6 high.
    let fb = compact_view().render(&SessionView::of(&s), Viewport::new(10, 7));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(9, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 5).unwrap().ch, '└');
    assert_eq!(fb.get(9, 5).unwrap().ch, '┘');
}

#[test]
fn term_view_places_tile_label_inside_its_cell() {
    let s = session(&[vec![0; 4], vec![0; 4], vec![0; 4], vec![2, 0, 0, 0]]);
    let fb = compact_view().render(&SessionView::of(&s), Viewport::new(10, 7));

    // Inside border: (1,1) origin, cell (row 3, col 0).
    assert_eq!(fb.get(1, 4).unwrap().ch, '2');
    assert!(fb.get(1, 4).unwrap().style.bold);
}

#[test]
fn term_view_writes_message_under_the_board() {
    let s = session(&[vec![0; 4], vec![0; 4], vec![0; 4], vec![0; 4]]);
    let view = SessionView::of(&s).with_message(Some("hi"));
    let fb = compact_view().render(&view, Viewport::new(10, 7));

    assert!(fb.row_text(6).starts_with("hi"));
}

#[test]
fn term_view_frames_diff_after_a_move() {
    let mut s = session(&[vec![2, 2], vec![0, 0]]);
    let view = GameView::default();
    let viewport = Viewport::new(50, 12);

    let before = view.render(&SessionView::of(&s), viewport);
    s.apply_move(tui_merge::types::Direction::Left).unwrap();
    let after = view.render(&SessionView::of(&s), viewport);
    assert_ne!(before, after);

    let mut full = Vec::new();
    encode_frame_into(None, &after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_frame_into(Some(&before), &after, &mut diff).unwrap();
    assert!(diff.len() < full.len());

    let mut none = Vec::new();
    encode_frame_into(Some(&after), &after.clone(), &mut none).unwrap();
    assert!(none.len() < diff.len());
}
