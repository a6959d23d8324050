//! Lane input module (engine-facing).
//!
//! This module is intentionally independent of where the text comes from. It
//! maps one line of lane or operator input into a validated 16-bit lane event,
//! and parses the roster prompts asked before a game starts. Anything that
//! reaches the scoring core has already been range-checked here.

pub mod error;
pub mod map;
pub mod roster;

pub use bowling_lane_types as types;

pub use error::InputError;
pub use map::parse_event_line;
pub use roster::{parse_player_count, parse_player_name};
