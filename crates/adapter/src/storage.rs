//! Scoreboard persistence.
//!
//! The file always holds a complete document: each write goes to a sibling
//! temp file which is then renamed over the target.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::config::LaneConfig;
use crate::protocol::{parse_scoreboard, to_json, ScoreboardMessage};

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
    tmp_path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        Self {
            path,
            tmp_path: PathBuf::from(tmp),
        }
    }

    /// Returns None when persistence is disabled.
    pub fn from_config(config: &LaneConfig) -> Option<Self> {
        config.snapshot_path.as_ref().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, board: &ScoreboardMessage) -> Result<()> {
        let json = to_json(board).map_err(|e| anyhow!("snapshot: encode failed: {}", e))?;
        fs::write(&self.tmp_path, json).map_err(|e| {
            anyhow!("snapshot: write {} failed: {}", self.tmp_path.display(), e)
        })?;
        fs::rename(&self.tmp_path, &self.path).map_err(|e| {
            anyhow!("snapshot: rename to {} failed: {}", self.path.display(), e)
        })?;
        Ok(())
    }

    pub fn read(&self) -> Result<ScoreboardMessage> {
        let text = fs::read_to_string(&self.path)
            .map_err(|e| anyhow!("snapshot: read {} failed: {}", self.path.display(), e))?;
        parse_scoreboard(&text)
            .map_err(|e| anyhow!("snapshot: {} is not a scoreboard: {}", self.path.display(), e))
    }
}
