use thiserror::Error;

/// Why a line of input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("{0:?}: invalid input")]
    NotANumber(String),

    #[error("{value}: out of range (0-{max})")]
    OutOfRange { value: i64, max: i64 },
}
