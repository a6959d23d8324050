use bowling_lane::input::{parse_event_line, parse_player_count, parse_player_name, InputError};
use bowling_lane::types::{LaneEvent, END_GAME_FLAG, RESET_FRAME_FLAG};

#[test]
fn console_lines_classify_as_lane_events() {
    let cases = [
        ("1023", LaneEvent::Throw { second: false }),
        ("1031", LaneEvent::Throw { second: true }),
        ("reset", LaneEvent::ResetFrame),
        ("2048", LaneEvent::ResetFrame),
        ("End", LaneEvent::EndGame),
        ("6144", LaneEvent::EndGame),
    ];
    for (line, expected) in cases {
        let raw = parse_event_line(line).unwrap();
        assert_eq!(LaneEvent::classify(raw), expected, "line {line:?}");
    }
    assert_eq!(parse_event_line("r"), Ok(RESET_FRAME_FLAG));
    assert_eq!(parse_event_line("OFF"), Ok(END_GAME_FLAG));
}

#[test]
fn invalid_console_lines_are_typed_errors() {
    assert_eq!(parse_event_line("   "), Err(InputError::Empty));
    assert_eq!(
        parse_event_line("1.5"),
        Err(InputError::NotANumber("1.5".to_string()))
    );
    assert!(matches!(
        parse_event_line("100000"),
        Err(InputError::OutOfRange { value: 100000, .. })
    ));
    assert!(matches!(
        parse_event_line("-3"),
        Err(InputError::OutOfRange { value: -3, .. })
    ));
}

#[test]
fn roster_prompts() {
    assert_eq!(parse_player_count("3\n"), Ok(3));
    assert!(parse_player_count("-2").is_err());
    assert_eq!(parse_player_name(" Bob "), Ok("Bob".to_string()));
    assert_eq!(parse_player_name(""), Err(InputError::Empty));
}
