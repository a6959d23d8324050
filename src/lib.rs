//! Bowling lane scorer (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as `bowling_lane::{core,adapter,term,input,types}`.

pub use bowling_lane_adapter as adapter;
pub use bowling_lane_core as core;
pub use bowling_lane_input as input;
pub use bowling_lane_term as term;
pub use bowling_lane_types as types;
