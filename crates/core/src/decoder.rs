//! Event decoder - raw lane events to throws
//!
//! A throw records which pins fell *because of it*. The lane reports pins
//! cumulatively within a frame, so a flagged second throw is decoded against the
//! raw event that preceded it in the same frame.

use crate::types::{LaneEvent, PinMask};

/// One ball rolled, as seen by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Throw {
    raw_value: u16,
    frame_index: usize,
    pin_mask: PinMask,
    pins_down: u8,
}

impl Throw {
    /// The event exactly as the lane sent it. Kept so a following second throw can be decoded.
    pub fn raw_value(&self) -> u16 {
        self.raw_value
    }

    /// 0-based index of the frame this throw belongs to.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Pins knocked down by this throw alone.
    pub fn pin_mask(&self) -> PinMask {
        self.pin_mask
    }

    pub fn pins_down(&self) -> u8 {
        self.pins_down
    }
}

/// Decode a throw event.
///
/// `previous_raw` is the raw event of the previous throw in the same frame, if any.
/// It is only consulted when the event carries the second-throw flag. A flagged
/// event with no earlier throw in the frame (e.g. right after a reset) is decoded
/// as-is.
pub fn decode_throw(raw: u16, frame_index: usize, previous_raw: Option<u16>) -> Throw {
    let reported = PinMask::from_event(raw);
    let pin_mask = match (LaneEvent::classify(raw), previous_raw) {
        (LaneEvent::Throw { second: true }, Some(prev)) => {
            reported.newly_down(PinMask::from_event(prev))
        }
        _ => reported,
    };

    Throw {
        raw_value: raw,
        frame_index,
        pin_mask,
        pins_down: pin_mask.count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SECOND_THROW_FLAG, STRIKE_MASK};

    #[test]
    fn first_throw_uses_mask_directly() {
        let t = decode_throw(0b0000_0111, 2, None);
        assert_eq!(t.raw_value(), 0b0000_0111);
        assert_eq!(t.frame_index(), 2);
        assert_eq!(t.pins_down(), 3);
    }

    #[test]
    fn strike_is_ten_pins() {
        assert_eq!(decode_throw(STRIKE_MASK, 0, None).pins_down(), 10);
    }

    #[test]
    fn second_throw_xors_against_previous_event() {
        // Throw 1 knocks pin 1; throw 2 reports pins 1 and 2 but only pin 2 is new.
        let first = decode_throw(0b01, 0, None);
        let second = decode_throw(SECOND_THROW_FLAG | 0b11, 0, Some(first.raw_value()));
        assert_eq!(second.pins_down(), 1);
        assert_eq!(second.pin_mask().bits(), 0b10);
        assert_eq!(second.raw_value(), SECOND_THROW_FLAG | 0b11);
    }

    #[test]
    fn unflagged_throw_ignores_previous_event() {
        // Fresh rack in the tenth frame after a strike.
        let t = decode_throw(0b111, 9, Some(STRIKE_MASK));
        assert_eq!(t.pins_down(), 3);
    }

    #[test]
    fn flagged_throw_without_previous_is_taken_as_reported() {
        let t = decode_throw(SECOND_THROW_FLAG | 0b1111, 4, None);
        assert_eq!(t.pins_down(), 4);
    }
}
