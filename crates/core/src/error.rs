//! Contract violations raised by the scoring core.
//!
//! None of these are expected at run time. Each one means the single-caller,
//! in-order event guarantee was broken upstream, so callers should stop the lane
//! rather than try to recover.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// A game needs at least one bowler.
    #[error("a game needs at least one player")]
    NoPlayers,

    /// An event arrived after the game ended.
    #[error("game is already over")]
    GameOver,

    /// A throw was delivered to a frame that accepts no more throws.
    #[error("frame {frame} is already complete")]
    FrameComplete { frame: usize },

    /// The player has bowled all ten frames.
    #[error("no frames left to bowl")]
    NoFramesLeft,
}
