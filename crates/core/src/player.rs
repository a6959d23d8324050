//! Player module - score sheet, throw history and deferred bonus resolution
//!
//! Strikes and spares are settled by looking back over the last three throws
//! each time a new one arrives:
//!
//! - the frame owning the throw two back gets `10 + next + next` if it is an
//!   unscored strike;
//! - the frame owning the throw one back gets `10 + next` if it is an unscored spare.
//!
//! The strike check runs first so cumulative totals are stamped in frame order.
//! The look-back sees frame marks as they stood *before* the incoming throw is
//! applied, so a frame's own second ball never settles its own spare.

use tracing::{debug, info};

use crate::decoder::{decode_throw, Throw};
use crate::error::ScoreError;
use crate::frame::{Frame, PendingScore};
use crate::types::{LaneEvent, FRAME_COUNT, PIN_COUNT};

/// What a single event did to the player's current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameProgress {
    /// The frame still expects more throws.
    Incomplete,
    /// The frame accepts no more throws. The turn passes.
    Completed { frame_index: usize },
    /// The in-progress frame was discarded along with `discarded` history entries.
    Reset { frame_index: usize, discarded: usize },
}

/// The last three throws, oldest first.
#[derive(Debug, Clone, Copy)]
struct LookBack {
    two_back: Throw,
    one_back: Throw,
    current: Throw,
}

impl LookBack {
    fn from_history(history: &[Throw]) -> Option<Self> {
        let [.., two_back, one_back, current] = history else {
            return None;
        };
        Some(Self {
            two_back: *two_back,
            one_back: *one_back,
            current: *current,
        })
    }
}

/// One bowler's side of the score sheet.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    frames: [Frame; FRAME_COUNT],
    /// Every throw taken, in order. Only a frame reset removes entries.
    throw_history: Vec<Throw>,
    current_frame_index: usize,
    running_total: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: std::array::from_fn(Frame::for_index),
            throw_history: Vec::with_capacity(21),
            current_frame_index: 0,
            running_total: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn throw_history(&self) -> &[Throw] {
        &self.throw_history
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame_index
    }

    pub fn running_total(&self) -> u32 {
        self.running_total
    }

    /// All ten frames have been bowled.
    pub fn is_finished(&self) -> bool {
        self.current_frame_index >= FRAME_COUNT
    }

    /// Apply one raw lane event to this player's current frame.
    ///
    /// Reset events discard the in-progress frame; every other event is decoded
    /// as a throw. Lane shutdown is the game's concern and is ignored here.
    pub fn handle_throw(&mut self, raw: u16) -> Result<FrameProgress, ScoreError> {
        let frame_index = self.current_frame_index;
        let Some(frame) = self.frames.get(frame_index) else {
            return Err(ScoreError::NoFramesLeft);
        };
        if frame.is_complete() {
            return Err(ScoreError::FrameComplete { frame: frame_index });
        }

        match LaneEvent::classify(raw) {
            LaneEvent::ResetFrame => return Ok(self.reset_current_frame()),
            LaneEvent::EndGame => return Ok(FrameProgress::Incomplete),
            LaneEvent::Throw { .. } => {}
        }

        let previous_raw = frame.throws().last().map(Throw::raw_value);
        let throw = decode_throw(raw, frame_index, previous_raw);
        self.throw_history.push(throw);
        self.resolve_deferred();

        let frame = &mut self.frames[frame_index];
        frame.handle_throw(throw)?;
        if !frame.is_complete() {
            return Ok(FrameProgress::Incomplete);
        }

        if let Some(score) = frame.open_score() {
            self.running_total += score;
            frame.stamp_total(self.running_total);
        }
        debug!(
            player = %self.name,
            frame = frame_index + 1,
            strike = frame.is_strike(),
            spare = frame.is_spare(),
            running_total = self.running_total,
            "frame complete"
        );
        self.current_frame_index += 1;
        Ok(FrameProgress::Completed { frame_index })
    }

    /// Settle any strike or spare that the newest throw makes resolvable.
    fn resolve_deferred(&mut self) {
        let Some(window) = LookBack::from_history(&self.throw_history) else {
            return;
        };
        let bonus_base = u32::from(PIN_COUNT);

        let strike_frame = window.two_back.frame_index();
        if self.frames[strike_frame].pending_score_kind() == Some(PendingScore::Strike) {
            let score = bonus_base
                + u32::from(window.one_back.pins_down())
                + u32::from(window.current.pins_down());
            self.settle(strike_frame, score);
        }

        let spare_frame = window.one_back.frame_index();
        if self.frames[spare_frame].pending_score_kind() == Some(PendingScore::Spare) {
            let score = bonus_base + u32::from(window.current.pins_down());
            self.settle(spare_frame, score);
        }
    }

    fn settle(&mut self, frame_index: usize, score: u32) {
        self.running_total += score;
        self.frames[frame_index].settle(score, self.running_total);
        debug!(
            player = %self.name,
            frame = frame_index + 1,
            score,
            running_total = self.running_total,
            "bonus resolved"
        );
    }

    /// Discard the in-progress frame and the history entries it recorded.
    ///
    /// Already-settled frames and the running total are left alone. In the tenth
    /// frame this drops every throw taken so far, bonus balls included.
    fn reset_current_frame(&mut self) -> FrameProgress {
        let frame_index = self.current_frame_index;
        let frame = &mut self.frames[frame_index];
        let discarded = frame.throws().len();
        let keep = self.throw_history.len().saturating_sub(discarded);
        self.throw_history.truncate(keep);
        *frame = frame.fresh();

        info!(
            player = %self.name,
            frame = frame_index + 1,
            discarded,
            "frame reset"
        );
        FrameProgress::Reset {
            frame_index,
            discarded,
        }
    }
}
