//! Roster prompts asked before the first ball.

use crate::error::InputError;

/// Number of bowlers. Must be at least one.
pub fn parse_player_count(line: &str) -> Result<usize, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    let value: i64 = line
        .parse()
        .map_err(|_| InputError::NotANumber(line.to_string()))?;
    match usize::try_from(value) {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(InputError::OutOfRange {
            value,
            max: i64::MAX,
        }),
    }
}

/// A bowler's display name, trimmed.
pub fn parse_player_name(line: &str) -> Result<String, InputError> {
    let name = line.trim();
    if name.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(name.to_string())
}
