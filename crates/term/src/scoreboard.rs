//! ScoreboardView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, one three-row block per bowler under a shared header:
//!
//! ```text
//! ----------------------------------------------------------
//! |name|| 1 || 2 || 3 || 4 || 5 || 6 || 7 || 8 || 9 || 10  |
//! ----------------------------------------------------------
//! |Ann || |X||7|/||...
//! |    || 20|| 33||...
//! ----------------------------------------------------------
//! ```

use crate::core::{FrameSnapshot, GameSnapshot, PlayerSnapshot, ThrowSnapshot};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{FRAME_COUNT, PIN_COUNT, TENTH_FRAME};

/// Columns taken by the name box.
const NAME_W: u16 = 6;
/// Columns taken by frames 1-9.
const FRAME_W: u16 = 5;
/// Columns taken by frame 10.
const TENTH_W: u16 = 7;
/// Full scoreboard width.
pub const BOARD_W: u16 = NAME_W + FRAME_W * (FRAME_COUNT as u16 - 1) + TENTH_W;
/// Header block height (rule, labels, rule).
const HEADER_H: u16 = 3;
/// Rows per bowler (marks, totals, rule).
const PLAYER_H: u16 = 3;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Text scoreboard in the classic paper-sheet style.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreboardView {
    /// Skip the status line under the last bowler.
    hide_status: bool,
}

impl ScoreboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_status(mut self) -> Self {
        self.hide_status = true;
        self
    }

    /// Smallest viewport that fits the whole board for `players` bowlers.
    pub fn required_viewport(&self, players: usize) -> Viewport {
        let status = if self.hide_status { 0 } else { 1 };
        let players = u16::try_from(players).unwrap_or(u16::MAX);
        let height = HEADER_H
            .saturating_add(PLAYER_H.saturating_mul(players))
            .saturating_add(status);
        Viewport::new(BOARD_W, height)
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::text().into_cell(' '));

        self.draw_rule(fb, 0);
        self.draw_header(fb, 1);
        self.draw_rule(fb, 2);

        let mut y = HEADER_H;
        for (i, player) in snap.players.iter().enumerate() {
            let up = !snap.game_over && i == snap.current_player;
            self.draw_player(fb, y, player, up);
            y = y.saturating_add(PLAYER_H);
        }

        if !self.hide_status {
            self.draw_status(fb, y, snap);
        }
    }

    /// Convenience helper that allocates a framebuffer just big enough for the board.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let viewport = self.required_viewport(snap.players.len());
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_rule(&self, fb: &mut FrameBuffer, y: u16) {
        fb.put_hline(0, BOARD_W, y, '-', CellStyle::rule());
    }

    fn draw_header(&self, fb: &mut FrameBuffer, y: u16) {
        let label = CellStyle::label();
        fb.put_str(0, y, "|name|", label);
        for frame in 0..FRAME_COUNT {
            let x = frame_x(frame);
            if frame == TENTH_FRAME {
                fb.put_str(x, y, "| 10  |", label);
            } else {
                fb.put_str(x, y, "|   |", label);
                fb.put_u32(x + 2, y, frame as u32 + 1, label);
            }
        }
    }

    fn draw_player(&self, fb: &mut FrameBuffer, y: u16, player: &PlayerSnapshot, up: bool) {
        let text = CellStyle::text();
        let name_style = if up { CellStyle::up() } else { text };

        fb.put_str(0, y, "|    |", text);
        fb.put_str(1, y, truncated(&player.name, 4), name_style);
        fb.put_str(0, y + 1, "|    |", text);

        for (index, frame) in player.frames.iter().enumerate() {
            let x = frame_x(index);
            if frame.is_tenth {
                fb.put_str(x, y, "| | | |", text);
                fb.put_str(x, y + 1, "|     |", text);
                let [a, b, c] = tenth_marks(frame);
                put_mark(fb, x + 1, y, a);
                put_mark(fb, x + 3, y, b);
                put_mark(fb, x + 5, y, c);
                if let Some(total) = frame.total_score {
                    fb.put_u32_right(x + 5, y + 1, total, text);
                }
            } else {
                fb.put_str(x, y, "| | |", text);
                fb.put_str(x, y + 1, "|   |", text);
                let [a, b] = regular_marks(frame);
                put_mark(fb, x + 1, y, a);
                put_mark(fb, x + 3, y, b);
                if let Some(total) = frame.total_score {
                    fb.put_u32_right(x + 3, y + 1, total, text);
                }
            }
        }

        self.draw_rule(fb, y + 2);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, y: u16, snap: &GameSnapshot) {
        let style = CellStyle::status();
        if snap.game_over {
            fb.put_str(0, y, "GAME OVER", style);
            return;
        }
        let Some(player) = snap.current() else {
            return;
        };
        let mut x = fb.put_str(0, y, "UP: ", style);
        x = x.saturating_add(fb.put_str(x, y, &player.name, style));
        x = x.saturating_add(fb.put_str(x, y, "  FRAME ", style));
        fb.put_u32(x, y, player.current_frame as u32 + 1, style);
    }
}

fn frame_x(index: usize) -> u16 {
    NAME_W + FRAME_W * index as u16
}

fn truncated(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

fn put_mark(fb: &mut FrameBuffer, x: u16, y: u16, ch: char) {
    let style = match ch {
        'X' => CellStyle::strike(),
        '/' => CellStyle::spare(),
        _ => CellStyle::text(),
    };
    fb.put_char(x, y, ch, style);
}

fn pins_char(throw: &ThrowSnapshot) -> char {
    if throw.pins_down == PIN_COUNT {
        return 'X';
    }
    char::from_digit(u32::from(throw.pins_down), 10).unwrap_or('?')
}

/// Two mark boxes for frames 1-9.
fn regular_marks(frame: &FrameSnapshot) -> [char; 2] {
    if frame.is_strike {
        return [' ', 'X'];
    }
    let first = frame.throw1.as_ref().map_or(' ', pins_char);
    if frame.is_spare {
        return [first, '/'];
    }
    let second = frame.throw2.as_ref().map_or(' ', pins_char);
    [first, second]
}

/// Three mark boxes for frame 10. `-` fills the third box when no bonus ball was earned.
fn tenth_marks(frame: &FrameSnapshot) -> [char; 3] {
    let mut marks = [' '; 3];
    let Some(t1) = frame.throw1 else {
        return marks;
    };
    marks[0] = pins_char(&t1);

    let Some(t2) = frame.throw2 else {
        return marks;
    };
    if frame.is_spare {
        marks[1] = '/';
    } else {
        marks[1] = pins_char(&t2);
        if !frame.is_strike {
            marks[2] = '-';
        }
    }

    if let Some(t3) = frame.throw3 {
        let converts = frame.is_strike
            && t2.pins_down < PIN_COUNT
            && t2.pins_down + t3.pins_down == PIN_COUNT;
        marks[2] = if converts { '/' } else { pins_char(&t3) };
    }
    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn throw(pins_down: u8) -> Option<ThrowSnapshot> {
        Some(ThrowSnapshot {
            pins_down,
            ..ThrowSnapshot::default()
        })
    }

    #[test]
    fn board_width_matches_classic_sheet() {
        assert_eq!(BOARD_W, 58);
        assert_eq!(frame_x(TENTH_FRAME), 51);
    }

    #[test]
    fn regular_marks_follow_sheet_notation() {
        let strike = FrameSnapshot {
            is_strike: true,
            throw1: throw(10),
            ..FrameSnapshot::default()
        };
        assert_eq!(regular_marks(&strike), [' ', 'X']);

        let spare = FrameSnapshot {
            is_spare: true,
            throw1: throw(7),
            throw2: throw(3),
            ..FrameSnapshot::default()
        };
        assert_eq!(regular_marks(&spare), ['7', '/']);

        let half = FrameSnapshot {
            throw1: throw(4),
            ..FrameSnapshot::default()
        };
        assert_eq!(regular_marks(&half), ['4', ' ']);
    }

    #[test]
    fn tenth_marks_cover_bonus_balls() {
        let turkey = FrameSnapshot {
            is_tenth: true,
            is_strike: true,
            throw1: throw(10),
            throw2: throw(10),
            throw3: throw(10),
            ..FrameSnapshot::default()
        };
        assert_eq!(tenth_marks(&turkey), ['X', 'X', 'X']);

        let strike_spare = FrameSnapshot {
            is_tenth: true,
            is_strike: true,
            throw1: throw(10),
            throw2: throw(6),
            throw3: throw(4),
            ..FrameSnapshot::default()
        };
        assert_eq!(tenth_marks(&strike_spare), ['X', '6', '/']);

        let open = FrameSnapshot {
            is_tenth: true,
            throw1: throw(3),
            throw2: throw(4),
            ..FrameSnapshot::default()
        };
        assert_eq!(tenth_marks(&open), ['3', '4', '-']);
    }

    #[test]
    fn huge_roster_height_saturates() {
        let view = ScoreboardView::new();
        assert_eq!(view.required_viewport(2).height, 10);
        assert_eq!(view.required_viewport(usize::MAX).height, u16::MAX);
        assert_eq!(view.without_status().required_viewport(70_000).height, u16::MAX);
    }

    #[test]
    fn names_are_cut_to_four_columns() {
        assert_eq!(truncated("Alexander", 4), "Alex");
        assert_eq!(truncated("Bo", 4), "Bo");
    }
}
