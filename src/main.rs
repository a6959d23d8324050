//! Lane runner (default binary).
//!
//! Reads the roster and then lane events from stdin, scores them, writes the
//! scoreboard document after every event and redraws the board in the terminal.

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bowling_lane::adapter::{build_scoreboard, LaneAdapter, LaneConfig, SnapshotStore};
use bowling_lane::core::{Game, GameSnapshot};
use bowling_lane::input::{parse_player_count, parse_player_name};
use bowling_lane::term::{FrameBuffer, ScoreboardView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = LaneConfig::from_env();
    let mut lane = LaneAdapter::start(&config)?;
    let mut term = TerminalRenderer::new().with_clear_screen(config.clear_screen);

    let Some(names) = read_roster(&mut lane, &mut term)? else {
        return Ok(());
    };
    let mut game = Game::new(names)?;
    let mut board = Board::new(SnapshotStore::from_config(&config));

    board.publish(&game, &mut term)?;
    while !game.is_over() {
        let Some(raw) = lane.next_event() else {
            info!("lane input ended before the game finished");
            break;
        };
        game.process_event(raw)?;
        board.publish(&game, &mut term)?;
    }

    Ok(())
}

/// Ask for the player count, then one name per player. `None` if input ends first.
fn read_roster(
    lane: &mut LaneAdapter,
    term: &mut TerminalRenderer,
) -> Result<Option<Vec<String>>> {
    let count = loop {
        term.prompt("How many players:")?;
        let Some(line) = lane.next_line() else {
            return Ok(None);
        };
        match parse_player_count(&line) {
            Ok(n) => break n,
            Err(e) => warn!(line = %line.trim(), error = %e, "invalid player count"),
        }
    };

    let mut names = Vec::with_capacity(count);
    while names.len() < count {
        term.prompt(&format!("Player {} name:", names.len() + 1))?;
        let Some(line) = lane.next_line() else {
            return Ok(None);
        };
        match parse_player_name(&line) {
            Ok(name) => names.push(name),
            Err(e) => warn!(error = %e, "invalid player name"),
        }
    }
    Ok(Some(names))
}

/// Reused buffers for the per-event snapshot, document and framebuffer.
struct Board {
    store: Option<SnapshotStore>,
    view: ScoreboardView,
    snap: GameSnapshot,
    fb: FrameBuffer,
}

impl Board {
    fn new(store: Option<SnapshotStore>) -> Self {
        Self {
            store,
            view: ScoreboardView::new(),
            snap: GameSnapshot::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    fn publish(&mut self, game: &Game, term: &mut TerminalRenderer) -> Result<()> {
        game.snapshot_into(&mut self.snap);

        if let Some(store) = &self.store {
            if let Err(e) = store.write(&build_scoreboard(&self.snap)) {
                warn!(path = %store.path().display(), error = %e, "snapshot not saved");
            }
        }

        let board = self.view.required_viewport(self.snap.players.len());
        let (w, _) = crossterm::terminal::size().unwrap_or((board.width, board.height));
        let viewport = Viewport::new(board.width.min(w), board.height);
        self.view.render_into(&self.snap, viewport, &mut self.fb);
        term.draw(&self.fb)
    }
}
