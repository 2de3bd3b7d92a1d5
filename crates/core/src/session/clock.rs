use std::time::{SystemTime, UNIX_EPOCH};

use fibby_model::Timestamp;
use tokio::time::Instant;

/// Hands out message timestamps.
///
/// Wall-clock time is read once, later timestamps advance with the tokio
/// clock so that a paused test runtime controls them too. Timestamps are
/// strictly increasing, even when two messages are created within the
/// same millisecond.
#[derive(Debug)]
pub struct Clock {
    wall_epoch_ms: u64,
    epoch: Instant,
    last: Option<Timestamp>,
}

impl Clock {
    pub fn new() -> Self {
        let wall_epoch_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_else(|err| {
                warn!("system clock is before the UNIX epoch: {err}");
                0
            });
        Self {
            wall_epoch_ms,
            epoch: Instant::now(),
            last: None,
        }
    }

    pub fn stamp(&mut self) -> Timestamp {
        let now = self.wall_epoch_ms + self.epoch.elapsed().as_millis() as u64;
        let ts = match self.last {
            Some(last) if now <= last.0 => Timestamp(last.0 + 1),
            _ => Timestamp(now),
        };
        self.last = Some(ts);
        ts
    }
}
