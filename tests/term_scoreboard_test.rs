use bowling_lane::core::Game;
use bowling_lane::term::{FrameBuffer, ScoreboardView, Viewport, BOARD_W};
use bowling_lane::types::{SECOND_THROW_FLAG, STRIKE_MASK};

fn rows(fb: &FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

#[test]
fn header_lists_every_frame() {
    let game = Game::new(["Ann"]).unwrap();
    let fb = ScoreboardView::new().render(&game.snapshot());
    let rows = rows(&fb);

    assert_eq!(fb.width(), BOARD_W);
    assert!(rows[0].chars().all(|c| c == '-'));
    assert_eq!(
        rows[1],
        "|name|| 1 || 2 || 3 || 4 || 5 || 6 || 7 || 8 || 9 || 10  |"
    );
    assert!(rows[2].chars().all(|c| c == '-'));
}

#[test]
fn marks_and_totals_follow_the_sheet() {
    let mut game = Game::new(["Annabel"]).unwrap();
    game.process_event(STRIKE_MASK).unwrap();
    game.process_event(0b0000_0111_1111).unwrap();
    game.process_event(SECOND_THROW_FLAG | 0b0011_1111_1111).unwrap();
    game.process_event(0b0000_0000_0011).unwrap();

    let fb = ScoreboardView::new().render(&game.snapshot());
    let rows = rows(&fb);

    assert!(rows[3].starts_with("|Anna|| |X||7|/||2| |"));
    assert!(rows[4].starts_with("|    || 20|| 32||   |"));
}

#[test]
fn tenth_frame_open_shows_dash() {
    let mut game = Game::new(["Ann"]).unwrap();
    for _ in 0..10 {
        game.process_event(0b0001).unwrap();
        game.process_event(SECOND_THROW_FLAG | 0b0011).unwrap();
    }

    let fb = ScoreboardView::new().render(&game.snapshot());
    let rows = rows(&fb);

    assert!(rows[3].ends_with("|1|1|-|"));
    assert!(rows[4].ends_with("|   20|"));
    assert!(rows.last().unwrap().starts_with("GAME OVER"));
}

#[test]
fn status_names_the_bowler_up() {
    let mut game = Game::new(["Ann", "Bob"]).unwrap();
    game.process_event(STRIKE_MASK).unwrap();

    let view = ScoreboardView::new();
    let fb = view.render(&game.snapshot());
    assert_eq!(view.required_viewport(2), Viewport::new(BOARD_W, 3 + 3 * 2 + 1));
    assert_eq!(fb.height(), 10);
    assert!(rows(&fb)[9].starts_with("UP: Bob  FRAME 1"));
}

#[test]
fn render_into_reuses_buffer_and_clips() {
    let game = Game::new(["Ann"]).unwrap();
    let view = ScoreboardView::new().without_status();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&game.snapshot(), Viewport::new(20, 6), &mut fb);
    assert_eq!(fb.width(), 20);
    assert_eq!(fb.height(), 6);
    assert_eq!(rows(&fb)[1], "|name|| 1 || 2 || 3 ");
}
