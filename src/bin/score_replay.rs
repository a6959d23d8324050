//! Headless replay: score a recorded event stream and print the final scoreboard.
//!
//! Usage: `score-replay [NAME...] < events.txt`
//!
//! One event per line (decimal value, or `reset` / `end`). With no names a
//! single bowler `P1` is scored. Invalid lines are logged and skipped.

use std::io::{self, BufRead};

use anyhow::{anyhow, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use bowling_lane::adapter::{build_scoreboard, to_json_pretty};
use bowling_lane::core::Game;
use bowling_lane::input::{parse_event_line, InputError};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        names.push("P1".to_string());
    }
    let mut game = Game::new(names)?;

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| anyhow!("replay: read stdin failed: {}", e))?;
        let raw = match parse_event_line(&line) {
            Ok(raw) => raw,
            Err(InputError::Empty) => continue,
            Err(e) => {
                warn!(line = %line.trim(), error = %e, "ignoring lane input");
                continue;
            }
        };
        game.process_event(raw)?;
        if game.is_over() {
            break;
        }
    }

    let json = to_json_pretty(&build_scoreboard(&game.snapshot()))
        .map_err(|e| anyhow!("replay: encode failed: {}", e))?;
    println!("{json}");
    Ok(())
}
