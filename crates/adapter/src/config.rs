//! Lane configuration from environment variables.

use std::path::PathBuf;

/// Runtime configuration for the lane adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneConfig {
    /// Where the scoreboard JSON is written after every event. `None` disables persistence.
    pub snapshot_path: Option<PathBuf>,
    /// Bound of the queue between the input reader and the scoring loop.
    pub max_pending_events: usize,
    /// Clear the terminal before each scoreboard redraw.
    pub clear_screen: bool,
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            snapshot_path: Some(PathBuf::from("data.json")),
            max_pending_events: 64,
            clear_screen: true,
        }
    }
}

impl LaneConfig {
    /// Create from environment variables.
    ///
    /// - `BOWLING_SNAPSHOT_PATH`: snapshot file (default `data.json`)
    /// - `BOWLING_SNAPSHOT_DISABLED`: `1`/`true` turns persistence off
    /// - `BOWLING_MAX_PENDING`: input queue bound (default 64)
    /// - `BOWLING_NO_CLEAR`: `1`/`true` keeps terminal scrollback
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LaneConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let snapshot_path = if is_truthy(lookup("BOWLING_SNAPSHOT_DISABLED")) {
            None
        } else {
            lookup("BOWLING_SNAPSHOT_PATH")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .or(defaults.snapshot_path)
        };

        let max_pending_events = lookup("BOWLING_MAX_PENDING")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.max_pending_events)
            .max(1);

        let clear_screen = !is_truthy(lookup("BOWLING_NO_CLEAR"));

        Self {
            snapshot_path,
            max_pending_events,
            clear_screen,
        }
    }
}

fn is_truthy(value: Option<String>) -> bool {
    value
        .map(|v| {
            let v = v.trim();
            v == "1" || v.eq_ignore_ascii_case("true")
        })
        .unwrap_or(false)
}
