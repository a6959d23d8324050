//! Core scoring module - pure, deterministic, and testable
//!
//! This module turns the lane's bit-encoded pin-fall events into ten-pin
//! scores. It has **zero dependencies** on terminal, storage, or input handling:
//! callers hand it validated 16-bit events one at a time and read back a
//! [`GameSnapshot`] after each one.
//!
//! # Module Structure
//!
//! - [`decoder`]: raw event to [`Throw`] (including second-throw XOR decoding)
//! - [`frame`]: ordinary and tenth-frame state machines
//! - [`player`]: score sheet, throw history, deferred strike/spare resolution, resets
//! - [`game`]: round-robin turn order and game termination
//! - [`snapshot`]: read-only state handed to display and storage
//!
//! # Scoring Rules
//!
//! - **Open frame**: scored as soon as its second ball is in
//! - **Spare**: `10 + next ball`, settled when that ball arrives
//! - **Strike**: `10 + next two balls`, settled when the second of them arrives
//! - **Tenth frame**: a strike or spare earns bonus balls inside the frame
//! - **Reset**: discards the in-progress frame only; settled totals never change
//!
//! # Example
//!
//! ```
//! use bowling_lane_core::Game;
//! use bowling_lane_core::types::{SECOND_THROW_FLAG, STRIKE_MASK};
//!
//! let mut game = Game::new(["Ann"]).unwrap();
//!
//! // Strike, then 3 + 4 in the next frame.
//! game.process_event(STRIKE_MASK).unwrap();
//! game.process_event(0b000_0111).unwrap();
//! game.process_event(SECOND_THROW_FLAG | 0b111_1111).unwrap();
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.players[0].frames[0].total_score, Some(17));
//! assert_eq!(snap.players[0].score, 24);
//! ```
//!
//! # Ordering
//!
//! Events must be applied in exactly the order the lane produced them. The
//! engine is single-threaded and synchronous; keeping a single caller draining a
//! single queue is the caller's job.

pub mod decoder;
pub mod error;
pub mod frame;
pub mod game;
pub mod player;
pub mod snapshot;

pub use bowling_lane_types as types;

// Re-export commonly used types for convenience
pub use decoder::{decode_throw, Throw};
pub use error::ScoreError;
pub use frame::{Frame, FrameMarks, PendingScore, RegularFrame, TenthFrame};
pub use game::{Game, GameProgress};
pub use player::{FrameProgress, Player};
pub use snapshot::{FrameSnapshot, GameSnapshot, PlayerSnapshot, ThrowSnapshot};
