//! Protocol module - JSON scoreboard document
//!
//! The scoreboard is the only contract with display and storage consumers.
//! Field names are fixed (note the camelCase `isStrike`/`isSpare`):
//!
//! ```text
//! { "players": [ { "name", "score", "frames": [
//!     { "isStrike", "isSpare", "score", "total_score", "frame_is_complete",
//!       "throw1", "throw2", ("throw3" on frame 10 only) } ] } ] }
//! ```
//!
//! A throw is `{ "data", "frame", "pins_down", "pin_list" }`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{FrameSnapshot, GameSnapshot, PlayerSnapshot, ThrowSnapshot};
use crate::types::PIN_COUNT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowMessage {
    /// Raw lane event that produced the throw.
    pub data: u16,
    /// 0-based frame index.
    pub frame: usize,
    pub pins_down: u8,
    pub pin_list: [u8; PIN_COUNT as usize],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameMessage {
    #[serde(rename = "isStrike")]
    pub is_strike: bool,
    #[serde(rename = "isSpare")]
    pub is_spare: bool,
    pub score: Option<u32>,
    pub total_score: Option<u32>,
    pub frame_is_complete: bool,
    pub throw1: Option<ThrowMessage>,
    pub throw2: Option<ThrowMessage>,
    /// Outer `None`: the key is absent (frames 1-9). `Some(None)`: frame 10 without a third ball.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub throw3: Option<Option<ThrowMessage>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMessage {
    pub name: String,
    pub score: u32,
    pub frames: Vec<FrameMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardMessage {
    pub players: Vec<PlayerMessage>,
}

/// A key that is present deserializes to `Some`, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<&ThrowSnapshot> for ThrowMessage {
    fn from(t: &ThrowSnapshot) -> Self {
        Self {
            data: t.data,
            frame: t.frame,
            pins_down: t.pins_down,
            pin_list: t.pin_list,
        }
    }
}

impl From<&FrameSnapshot> for FrameMessage {
    fn from(f: &FrameSnapshot) -> Self {
        Self {
            is_strike: f.is_strike,
            is_spare: f.is_spare,
            score: f.score,
            total_score: f.total_score,
            frame_is_complete: f.complete,
            throw1: f.throw1.as_ref().map(ThrowMessage::from),
            throw2: f.throw2.as_ref().map(ThrowMessage::from),
            throw3: f.is_tenth.then(|| f.throw3.as_ref().map(ThrowMessage::from)),
        }
    }
}

impl From<&PlayerSnapshot> for PlayerMessage {
    fn from(p: &PlayerSnapshot) -> Self {
        Self {
            name: p.name.clone(),
            score: p.score,
            frames: p.frames.iter().map(FrameMessage::from).collect(),
        }
    }
}

/// Build the scoreboard document from a game snapshot.
pub fn build_scoreboard(snap: &GameSnapshot) -> ScoreboardMessage {
    ScoreboardMessage {
        players: snap.players.iter().map(PlayerMessage::from).collect(),
    }
}

pub fn to_json(board: &ScoreboardMessage) -> serde_json::Result<String> {
    serde_json::to_string(board)
}

pub fn to_json_pretty(board: &ScoreboardMessage) -> serde_json::Result<String> {
    serde_json::to_string_pretty(board)
}

/// Parse a scoreboard document, e.g. one read back from the snapshot file.
pub fn parse_scoreboard(s: &str) -> serde_json::Result<ScoreboardMessage> {
    serde_json::from_str(s)
}
