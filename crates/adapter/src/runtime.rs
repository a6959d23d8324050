//! Adapter runtime integration.
//!
//! Bridges the lane console (an async line source) with the synchronous
//! scoring loop through one bounded queue, so events are handled strictly in
//! arrival order.

use anyhow::{anyhow, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::LaneConfig;
use crate::input::{parse_event_line, InputError};

/// Running adapter instance.
pub struct LaneAdapter {
    rt: Option<Runtime>,
    line_rx: mpsc::Receiver<String>,
}

impl LaneAdapter {
    /// Start reading lane events from stdin.
    pub fn start(config: &LaneConfig) -> Result<Self> {
        Self::start_with_reader(tokio::io::stdin(), config.max_pending_events)
    }

    /// Start reading lane events from any line source.
    pub fn start_with_reader<R>(reader: R, max_pending: usize) -> Result<Self>
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (line_tx, line_rx) = mpsc::channel::<String>(max_pending.max(1));
        let rt = Runtime::new().map_err(|e| anyhow!("adapter: runtime start failed: {}", e))?;
        rt.spawn(read_lines(reader, line_tx));

        Ok(Self {
            rt: Some(rt),
            line_rx,
        })
    }

    /// Next raw line, blocking. `None` once the source is exhausted.
    pub fn next_line(&mut self) -> Option<String> {
        self.line_rx.blocking_recv()
    }

    /// Next valid lane event, blocking. Lines that do not parse are logged and skipped.
    pub fn next_event(&mut self) -> Option<u16> {
        loop {
            let line = self.next_line()?;
            match parse_event_line(&line) {
                Ok(raw) => return Some(raw),
                Err(InputError::Empty) => continue,
                Err(e) => warn!(line = %line.trim(), error = %e, "ignoring lane input"),
            }
        }
    }
}

impl Drop for LaneAdapter {
    fn drop(&mut self) {
        // A stdin read parked on a blocking thread would otherwise hold the shutdown.
        if let Some(rt) = self.rt.take() {
            rt.shutdown_background();
        }
    }
}

async fn read_lines<R>(reader: R, line_tx: mpsc::Sender<String>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if line_tx.send(line).await.is_err() {
                    break;
                }
            }
            Ok(None) => {
                debug!("lane input closed");
                break;
            }
            Err(e) => {
                warn!(error = %e, "lane input read failed");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn adapter(input: &str) -> LaneAdapter {
        LaneAdapter::start_with_reader(Cursor::new(input.as_bytes().to_vec()), 2).unwrap()
    }

    #[test]
    fn lines_arrive_in_order_then_end() {
        let mut a = adapter("2\nAnn\nBob\n");
        assert_eq!(a.next_line().as_deref(), Some("2"));
        assert_eq!(a.next_line().as_deref(), Some("Ann"));
        assert_eq!(a.next_line().as_deref(), Some("Bob"));
        assert_eq!(a.next_line(), None);
    }

    #[test]
    fn invalid_events_are_skipped() {
        let mut a = adapter("7\nseven\n\n70000\n-1\nreset\n1023");
        assert_eq!(a.next_event(), Some(7));
        assert_eq!(a.next_event(), Some(2048));
        assert_eq!(a.next_event(), Some(1023));
        assert_eq!(a.next_event(), None);
    }
}
