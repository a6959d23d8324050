//! Frame module - per-frame state machines
//!
//! Frames 1-9 take at most two throws and complete on a strike or after the
//! second ball. The tenth frame always takes a second ball, and a third one when
//! the first two throws produced a strike or a spare.
//!
//! Frames never score their own strikes or spares: they only raise the mark and
//! leave [`Frame::pending_score_kind`] set until the owning player has seen
//! enough later throws to settle it.

use arrayvec::ArrayVec;

use crate::decoder::Throw;
use crate::error::ScoreError;
use crate::types::{PIN_COUNT, TENTH_FRAME};

/// Kind of bonus a marked frame is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingScore {
    /// Needs the next two throws.
    Strike,
    /// Needs the next throw.
    Spare,
}

/// Scoring marks shared by both frame variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameMarks {
    pub is_strike: bool,
    pub is_spare: bool,
    /// The frame's own score. Set at completion for an open frame, at resolution otherwise.
    pub score: Option<u32>,
    /// Player's running total right after this frame was scored. Stamped exactly once.
    pub total_score: Option<u32>,
    pub complete: bool,
}

/// Frames 1-9.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegularFrame {
    throws: ArrayVec<Throw, 2>,
    marks: FrameMarks,
}

impl RegularFrame {
    pub fn handle_throw(&mut self, throw: Throw) -> Result<(), ScoreError> {
        if self.marks.complete {
            return Err(ScoreError::FrameComplete {
                frame: throw.frame_index(),
            });
        }

        let Some(first) = self.throws.first().copied() else {
            self.throws.push(throw);
            if throw.pins_down() == PIN_COUNT {
                // Scored two throws later by the player.
                self.marks.is_strike = true;
                self.marks.complete = true;
            }
            return Ok(());
        };

        self.throws.push(throw);
        let pins = first.pins_down() + throw.pins_down();
        if pins == PIN_COUNT {
            self.marks.is_spare = true;
        } else {
            self.marks.score = Some(u32::from(pins));
        }
        self.marks.complete = true;
        Ok(())
    }
}

/// Frame 10.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TenthFrame {
    throws: ArrayVec<Throw, 3>,
    marks: FrameMarks,
}

impl TenthFrame {
    pub fn handle_throw(&mut self, throw: Throw) -> Result<(), ScoreError> {
        if self.marks.complete {
            return Err(ScoreError::FrameComplete {
                frame: throw.frame_index(),
            });
        }

        match self.throws.len() {
            0 => {
                self.throws.push(throw);
                // Not complete yet: the tenth frame always gets a second ball.
                self.marks.is_strike = throw.pins_down() == PIN_COUNT;
            }
            1 => {
                let first = self.throws[0];
                self.throws.push(throw);
                if self.marks.is_strike {
                    return Ok(());
                }
                let pins = first.pins_down() + throw.pins_down();
                if pins == PIN_COUNT {
                    self.marks.is_spare = true;
                } else {
                    self.marks.score = Some(u32::from(pins));
                    self.marks.complete = true;
                }
            }
            _ => {
                self.throws.push(throw);
                self.marks.complete = true;
            }
        }
        Ok(())
    }
}

/// One entry of a player's score sheet.
///
/// The set of frame behaviours is closed, so both variants live behind a single
/// enum and share one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Regular(RegularFrame),
    Tenth(TenthFrame),
}

impl Frame {
    /// Empty frame of the right variant for a 0-based frame index.
    pub fn for_index(index: usize) -> Self {
        if index == TENTH_FRAME {
            Frame::Tenth(TenthFrame::default())
        } else {
            Frame::Regular(RegularFrame::default())
        }
    }

    /// Empty frame of the same variant, used to discard an in-progress frame.
    pub fn fresh(&self) -> Self {
        match self {
            Frame::Regular(_) => Frame::Regular(RegularFrame::default()),
            Frame::Tenth(_) => Frame::Tenth(TenthFrame::default()),
        }
    }

    pub fn handle_throw(&mut self, throw: Throw) -> Result<(), ScoreError> {
        match self {
            Frame::Regular(f) => f.handle_throw(throw),
            Frame::Tenth(f) => f.handle_throw(throw),
        }
    }

    pub fn marks(&self) -> &FrameMarks {
        match self {
            Frame::Regular(f) => &f.marks,
            Frame::Tenth(f) => &f.marks,
        }
    }

    fn marks_mut(&mut self) -> &mut FrameMarks {
        match self {
            Frame::Regular(f) => &mut f.marks,
            Frame::Tenth(f) => &mut f.marks,
        }
    }

    /// Throws recorded so far, in order.
    pub fn throws(&self) -> &[Throw] {
        match self {
            Frame::Regular(f) => f.throws.as_slice(),
            Frame::Tenth(f) => f.throws.as_slice(),
        }
    }

    /// 0-based throw slot (0 = first ball).
    pub fn throw(&self, slot: usize) -> Option<&Throw> {
        self.throws().get(slot)
    }

    pub fn is_tenth(&self) -> bool {
        matches!(self, Frame::Tenth(_))
    }

    pub fn is_complete(&self) -> bool {
        self.marks().complete
    }

    pub fn is_strike(&self) -> bool {
        self.marks().is_strike
    }

    pub fn is_spare(&self) -> bool {
        self.marks().is_spare
    }

    pub fn score(&self) -> Option<u32> {
        self.marks().score
    }

    pub fn total_score(&self) -> Option<u32> {
        self.marks().total_score
    }

    /// Bonus this frame is still waiting on, if any.
    pub fn pending_score_kind(&self) -> Option<PendingScore> {
        let marks = self.marks();
        if marks.score.is_some() {
            return None;
        }
        if marks.is_strike {
            Some(PendingScore::Strike)
        } else if marks.is_spare {
            Some(PendingScore::Spare)
        } else {
            None
        }
    }

    /// Score of a completed frame without a mark. `None` for strikes, spares and
    /// unfinished frames.
    pub fn open_score(&self) -> Option<u32> {
        let marks = self.marks();
        if !marks.complete || marks.is_strike || marks.is_spare {
            return None;
        }
        marks.score
    }

    /// Record a resolved bonus score.
    pub(crate) fn settle(&mut self, score: u32, running_total: u32) {
        let marks = self.marks_mut();
        marks.score = Some(score);
        marks.total_score = Some(running_total);
    }

    /// Stamp the running total after an open frame has been added to it.
    pub(crate) fn stamp_total(&mut self, running_total: u32) {
        self.marks_mut().total_score = Some(running_total);
    }
}
