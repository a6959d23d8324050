//! Adapter module - lane console bridge and scoreboard document
//!
//! Everything outside the scoring core that talks to the world lives here:
//!
//! 1. **Input**: a reader task pulls lines from the lane console (stdin by
//!    default) into one bounded queue. The scoring loop drains it in order.
//! 2. **Protocol**: after every processed event the game snapshot is turned
//!    into the JSON scoreboard document (see [`protocol`]).
//! 3. **Storage**: the document is written to the snapshot file for any
//!    external display (see [`storage`]).
//!
//! # Environment Variables
//!
//! - `BOWLING_SNAPSHOT_PATH`: snapshot file (default: "data.json")
//! - `BOWLING_SNAPSHOT_DISABLED`: "1" or "true" to skip persistence
//! - `BOWLING_MAX_PENDING`: input queue bound (default: 64)
//! - `BOWLING_NO_CLEAR`: "1" or "true" to keep terminal scrollback
//!
//! # Example Session
//!
//! ```text
//! 1          <- player count
//! Ann        <- player name
//! 1023       <- strike
//! 7          <- pins 1-3
//! 1087       <- second throw flag | pins 1-7
//! reset      <- discard the current frame's throws
//! end        <- end the game
//! ```

pub mod config;
pub mod protocol;
pub mod runtime;
pub mod storage;

pub use bowling_lane_core as core;
pub use bowling_lane_input as input;
pub use bowling_lane_types as types;

pub use config::LaneConfig;
pub use protocol::*;
pub use runtime::LaneAdapter;
pub use storage::SnapshotStore;
