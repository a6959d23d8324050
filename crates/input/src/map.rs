//! Line mapping from lane/operator text to lane events.

use crate::error::InputError;
use crate::types::{END_GAME_FLAG, RESET_FRAME_FLAG};

/// Map one line of input to a raw lane event.
///
/// Accepts a decimal event value in `0..=65535`, or the operator keywords
/// `reset`/`r` and `end`/`off` (case-insensitive).
pub fn parse_event_line(line: &str) -> Result<u16, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    match line.to_ascii_lowercase().as_str() {
        "reset" | "r" => return Ok(RESET_FRAME_FLAG),
        "end" | "off" => return Ok(END_GAME_FLAG),
        _ => {}
    }

    let value: i64 = line
        .parse()
        .map_err(|_| InputError::NotANumber(line.to_string()))?;
    u16::try_from(value).map_err(|_| InputError::OutOfRange {
        value,
        max: i64::from(u16::MAX),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_events() {
        assert_eq!(parse_event_line("0"), Ok(0));
        assert_eq!(parse_event_line("1023"), Ok(1023));
        assert_eq!(parse_event_line("  2047\n"), Ok(2047));
        assert_eq!(parse_event_line("65535"), Ok(u16::MAX));
    }

    #[test]
    fn test_operator_keywords() {
        assert_eq!(parse_event_line("reset"), Ok(RESET_FRAME_FLAG));
        assert_eq!(parse_event_line("R"), Ok(RESET_FRAME_FLAG));
        assert_eq!(parse_event_line("END"), Ok(END_GAME_FLAG));
        assert_eq!(parse_event_line("off"), Ok(END_GAME_FLAG));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            parse_event_line("65536"),
            Err(InputError::OutOfRange {
                value: 65536,
                max: 65535
            })
        );
        assert_eq!(
            parse_event_line("-1"),
            Err(InputError::OutOfRange {
                value: -1,
                max: 65535
            })
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_event_line(""), Err(InputError::Empty));
        assert_eq!(parse_event_line("   "), Err(InputError::Empty));
        assert_eq!(
            parse_event_line("ten"),
            Err(InputError::NotANumber("ten".to_string()))
        );
        assert!(parse_event_line("1.5").is_err());
    }
}
