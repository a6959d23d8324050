//! Game module - turn orchestration across players
//!
//! Every lane event goes to the current bowler. When that bowler's frame
//! completes, the turn passes round-robin; the game ends when every player has
//! completed ten frames or the lane sends the end-game flag.

use tracing::{debug, info};

use crate::error::ScoreError;
use crate::player::{FrameProgress, Player};
use crate::snapshot::GameSnapshot;
use crate::types::{LaneEvent, FRAME_COUNT};

/// What a processed event did to the game as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameProgress {
    /// The current bowler's frame is still open.
    InProgress,
    /// The current bowler finished a frame; `next_player` is up.
    TurnPassed { next_player: usize },
    /// The current bowler's in-progress frame was discarded.
    FrameReset { player: usize },
    /// The last frame of the last bowler completed.
    Finished,
    /// The lane was switched off.
    EndRequested,
}

/// A single match on one lane.
#[derive(Debug, Clone)]
pub struct Game {
    players: Vec<Player>,
    current_player_index: usize,
    frames_completed_count: usize,
    total_frames_target: usize,
    is_over: bool,
}

impl Game {
    /// Create a game for the given bowlers, in turn order.
    pub fn new<I, S>(names: I) -> Result<Self, ScoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names.into_iter().map(Player::new).collect();
        if players.is_empty() {
            return Err(ScoreError::NoPlayers);
        }
        let total_frames_target = players.len() * FRAME_COUNT;

        Ok(Self {
            players,
            current_player_index: 0,
            frames_completed_count: 0,
            total_frames_target,
            is_over: false,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn frames_completed_count(&self) -> usize {
        self.frames_completed_count
    }

    pub fn total_frames_target(&self) -> usize {
        self.total_frames_target
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Apply one raw lane event.
    pub fn process_event(&mut self, raw: u16) -> Result<GameProgress, ScoreError> {
        if self.is_over {
            return Err(ScoreError::GameOver);
        }
        if LaneEvent::classify(raw) == LaneEvent::EndGame {
            info!(
                frames_completed = self.frames_completed_count,
                "lane switched off"
            );
            self.is_over = true;
            return Ok(GameProgress::EndRequested);
        }

        let player = self.current_player_index;
        match self.players[player].handle_throw(raw)? {
            FrameProgress::Incomplete => Ok(GameProgress::InProgress),
            FrameProgress::Reset { .. } => Ok(GameProgress::FrameReset { player }),
            FrameProgress::Completed { .. } => Ok(self.advance_turn()),
        }
    }

    fn advance_turn(&mut self) -> GameProgress {
        self.frames_completed_count += 1;
        if self.frames_completed_count == self.total_frames_target {
            info!(players = self.players.len(), "game finished");
            self.is_over = true;
            return GameProgress::Finished;
        }

        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        debug!(next_player = self.current_player_index, "turn passed");
        GameProgress::TurnPassed {
            next_player: self.current_player_index,
        }
    }

    /// Fill `out` with the current state, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.players.truncate(self.players.len());
        for (i, player) in self.players.iter().enumerate() {
            match out.players.get_mut(i) {
                Some(slot) => player.snapshot_into(slot),
                None => out.players.push(player.snapshot()),
            }
        }
        out.current_player = self.current_player_index;
        out.frames_completed = self.frames_completed_count;
        out.game_over = self.is_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
