use serde_json::{json, Value};

use bowling_lane::adapter::protocol::{build_scoreboard, parse_scoreboard, to_json};
use bowling_lane::core::Game;
use bowling_lane::types::{SECOND_THROW_FLAG, STRIKE_MASK};

fn board_value(game: &Game) -> Value {
    serde_json::from_str(&to_json(&build_scoreboard(&game.snapshot())).unwrap()).unwrap()
}

#[test]
fn scoreboard_has_fixed_shape() {
    let game = Game::new(["Ann", "Bob"]).unwrap();
    let value = board_value(&game);

    let root = value.as_object().unwrap();
    assert_eq!(root.keys().collect::<Vec<_>>(), vec!["players"]);

    let players = value["players"].as_array().unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0]["name"], "Ann");
    assert_eq!(players[1]["name"], "Bob");
    assert_eq!(players[0]["score"], 0);

    let frames = players[0]["frames"].as_array().unwrap();
    assert_eq!(frames.len(), 10);
    let mut keys: Vec<&str> = frames[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "frame_is_complete",
            "isSpare",
            "isStrike",
            "score",
            "throw1",
            "throw2",
            "total_score"
        ]
    );
    assert!(frames[9].as_object().unwrap().contains_key("throw3"));
}

#[test]
fn throws_carry_raw_event_and_pin_list() {
    let mut game = Game::new(["Ann"]).unwrap();
    game.process_event(0b0000_0000_0101).unwrap();
    game.process_event(SECOND_THROW_FLAG | 0b0000_0000_0111).unwrap();

    let value = board_value(&game);
    let frame = &value["players"][0]["frames"][0];
    assert_eq!(
        frame["throw1"],
        json!({
            "data": 5,
            "frame": 0,
            "pins_down": 2,
            "pin_list": [1, 0, 1, 0, 0, 0, 0, 0, 0, 0]
        })
    );
    assert_eq!(frame["throw2"]["data"], 1024 + 7);
    assert_eq!(frame["throw2"]["pins_down"], 1);
    assert_eq!(frame["throw2"]["pin_list"], json!([0, 1, 0, 0, 0, 0, 0, 0, 0, 0]));
    assert_eq!(frame["score"], 3);
    assert_eq!(frame["total_score"], 3);
    assert_eq!(value["players"][0]["score"], 3);
}

#[test]
fn unresolved_strike_serializes_nulls() {
    let mut game = Game::new(["Ann"]).unwrap();
    game.process_event(STRIKE_MASK).unwrap();

    let value = board_value(&game);
    let frame = &value["players"][0]["frames"][0];
    assert_eq!(frame["isStrike"], true);
    assert_eq!(frame["isSpare"], false);
    assert_eq!(frame["frame_is_complete"], true);
    assert!(frame["score"].is_null());
    assert!(frame["total_score"].is_null());
    assert!(frame["throw2"].is_null());

    let next = &value["players"][0]["frames"][1];
    assert_eq!(next["frame_is_complete"], false);
    assert!(next["throw1"].is_null());
}

#[test]
fn tenth_frame_reports_third_throw() {
    let mut game = Game::new(["Ann"]).unwrap();
    for _ in 0..12 {
        game.process_event(STRIKE_MASK).unwrap();
    }
    let value = board_value(&game);
    let tenth = &value["players"][0]["frames"][9];

    assert_eq!(tenth["throw3"]["pins_down"], 10);
    assert_eq!(tenth["throw3"]["frame"], 9);
    assert_eq!(tenth["score"], 30);
    assert_eq!(tenth["total_score"], 300);
    assert_eq!(value["players"][0]["score"], 300);
}

#[test]
fn document_parses_back_into_messages() {
    let mut game = Game::new(["Ann"]).unwrap();
    game.process_event(STRIKE_MASK).unwrap();
    game.process_event(0b0001).unwrap();

    let board = build_scoreboard(&game.snapshot());
    let parsed = parse_scoreboard(&to_json(&board).unwrap()).unwrap();
    assert_eq!(parsed, board);
    assert_eq!(parsed.players[0].frames[1].throw1.as_ref().unwrap().pins_down, 1);
}
