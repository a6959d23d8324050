//! Terminal scoreboard module.
//!
//! A small rendering layer for the lane console. The scoreboard is drawn into
//! a framebuffer of styled cells, which is then flushed to the terminal with
//! crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout pure so it can be asserted on cell by cell
//! - Reproduce the paper score sheet: marks on top, running totals below

pub mod fb;
pub mod renderer;
pub mod scoreboard;

pub use bowling_lane_core as core;
pub use bowling_lane_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_full_into, encode_rows_into, TerminalRenderer};
pub use scoreboard::{ScoreboardView, Viewport, BOARD_W};
