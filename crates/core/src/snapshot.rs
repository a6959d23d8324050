//! Read-only view of a game, handed to display and storage after every event.

use crate::decoder::Throw;
use crate::frame::Frame;
use crate::player::Player;
use crate::types::{FRAME_COUNT, PIN_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ThrowSnapshot {
    /// Raw lane event.
    pub data: u16,
    /// 0-based frame index.
    pub frame: usize,
    pub pins_down: u8,
    /// 1 = knocked down by this throw. Index 0 is pin 1.
    pub pin_list: [u8; PIN_COUNT as usize],
}

impl From<&Throw> for ThrowSnapshot {
    fn from(value: &Throw) -> Self {
        Self {
            data: value.raw_value(),
            frame: value.frame_index(),
            pins_down: value.pins_down(),
            pin_list: value.pin_mask().pin_list(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameSnapshot {
    pub is_strike: bool,
    pub is_spare: bool,
    pub score: Option<u32>,
    pub total_score: Option<u32>,
    pub complete: bool,
    /// Frame 10. Only this frame has a third throw slot.
    pub is_tenth: bool,
    pub throw1: Option<ThrowSnapshot>,
    pub throw2: Option<ThrowSnapshot>,
    pub throw3: Option<ThrowSnapshot>,
}

impl From<&Frame> for FrameSnapshot {
    fn from(value: &Frame) -> Self {
        let marks = value.marks();
        Self {
            is_strike: marks.is_strike,
            is_spare: marks.is_spare,
            score: marks.score,
            total_score: marks.total_score,
            complete: marks.complete,
            is_tenth: value.is_tenth(),
            throw1: value.throw(0).map(ThrowSnapshot::from),
            throw2: value.throw(1).map(ThrowSnapshot::from),
            throw3: value.throw(2).map(ThrowSnapshot::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerSnapshot {
    pub name: String,
    /// Running total of every frame settled so far.
    pub score: u32,
    pub current_frame: usize,
    pub frames: [FrameSnapshot; FRAME_COUNT],
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub current_player: usize,
    pub frames_completed: usize,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn current(&self) -> Option<&PlayerSnapshot> {
        self.players.get(self.current_player)
    }
}

impl Player {
    pub fn snapshot_into(&self, out: &mut PlayerSnapshot) {
        out.name.clear();
        out.name.push_str(self.name());
        out.score = self.running_total();
        out.current_frame = self.current_frame_index();
        for (slot, frame) in out.frames.iter_mut().zip(self.frames()) {
            *slot = FrameSnapshot::from(frame);
        }
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        let mut s = PlayerSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
