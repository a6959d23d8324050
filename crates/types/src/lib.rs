//! Core types module - lane wire format and shared constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scoring core, scoreboard rendering, snapshot protocol).
//!
//! # Event Format
//!
//! The lane hardware emits one 16-bit event per throw or operator action:
//!
//! | Bits | Meaning |
//! |------|---------|
//! | 0-9 | Pin mask (bit 0 = pin 1, bit 9 = pin 10) |
//! | 10 | Second throw of the frame |
//! | 11 | Reset the current frame |
//! | 12 | Turn the lane off (end game) |
//! | 13-15 | Reserved |
//!
//! Pins are laid out on the deck as:
//!
//! ```text
//!  10 9 8 7
//!    6 5 4
//!     3 2
//!      1
//! ```
//!
//! On a second throw the machinery re-reports every pin that is already down, so
//! the pins knocked down by that throw alone are `current XOR previous`.
//!
//! # Examples
//!
//! ```
//! use bowling_lane_types::{LaneEvent, PinMask, RESET_FRAME_FLAG, SECOND_THROW_FLAG};
//!
//! // Throw 1 knocks down pin 1, throw 2 reports pins 1 and 2.
//! let first = PinMask::from_event(0b01);
//! let second = PinMask::from_event(SECOND_THROW_FLAG | 0b11);
//! assert_eq!(second.newly_down(first).count(), 1);
//!
//! assert_eq!(LaneEvent::classify(RESET_FRAME_FLAG), LaneEvent::ResetFrame);
//! assert_eq!(
//!     LaneEvent::classify(SECOND_THROW_FLAG | 0b11),
//!     LaneEvent::Throw { second: true }
//! );
//! ```

/// Number of pins on the deck
pub const PIN_COUNT: u8 = 10;

/// Frames per player per game
pub const FRAME_COUNT: usize = 10;

/// Index of the final frame (the one with bonus throws)
pub const TENTH_FRAME: usize = FRAME_COUNT - 1;

/// Bits 0-9: pins reported down
pub const PIN_MASK: u16 = 0x03FF;

/// Bit 10: the event is the second throw of the frame
pub const SECOND_THROW_FLAG: u16 = 1 << 10;

/// Bit 11: discard the in-progress frame
pub const RESET_FRAME_FLAG: u16 = 1 << 11;

/// Bit 12: turn the lane off
pub const END_GAME_FLAG: u16 = 1 << 12;

/// All ten pins down
pub const STRIKE_MASK: u16 = PIN_MASK;

/// Set of pins knocked down, one bit per pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PinMask(u16);

impl PinMask {
    /// Extract the pin bits from a raw lane event, ignoring the flag bits.
    pub const fn from_event(raw: u16) -> Self {
        Self(raw & PIN_MASK)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Number of pins in the set.
    pub const fn count(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Whether `pin` (0-based, 0 = head pin) is in the set.
    pub const fn is_down(self, pin: u8) -> bool {
        pin < PIN_COUNT && self.0 & (1 << pin) != 0
    }

    /// Per-pin view, 1 = down. Index 0 is pin 1.
    pub fn pin_list(self) -> [u8; PIN_COUNT as usize] {
        let mut out = [0u8; PIN_COUNT as usize];
        for (pin, slot) in out.iter_mut().enumerate() {
            *slot = u8::from(self.is_down(pin as u8));
        }
        out
    }

    /// Pins in `self` that were not already reported in `previous`.
    ///
    /// The lane re-reports fallen pins on the second throw, so this is a plain XOR.
    pub const fn newly_down(self, previous: PinMask) -> Self {
        Self(self.0 ^ previous.0)
    }
}

/// What a raw lane event asks the scorer to do.
///
/// Flags are checked in priority order: end-game, then reset, then throw.
/// An event is never both a reset and a throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneEvent {
    /// Pins fell. `second` is set when the lane flagged this as the frame's second throw.
    Throw { second: bool },
    /// Operator correction: discard the current frame's recorded throws.
    ResetFrame,
    /// Lane switched off.
    EndGame,
}

impl LaneEvent {
    pub const fn classify(raw: u16) -> Self {
        if raw & END_GAME_FLAG != 0 {
            LaneEvent::EndGame
        } else if raw & RESET_FRAME_FLAG != 0 {
            LaneEvent::ResetFrame
        } else {
            LaneEvent::Throw {
                second: raw & SECOND_THROW_FLAG != 0,
            }
        }
    }
}
