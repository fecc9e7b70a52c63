use std::time::{Duration, Instant};

use app::Publisher;
use market_feed::{fetch_record, Error, Snapshot, Symbol};
use tracing::{debug, info};

use super::RefreshLoop;

impl RefreshLoop {
    /// Attempt every symbol once, in order. A symbol whose quotes cannot be
    /// fetched still yields a record; only a fatal error aborts the sweep.
    pub async fn sweep(&self, working_set: &[Symbol]) -> Result<Snapshot, Error> {
        let mut records = Vec::with_capacity(working_set.len());
        for symbol in working_set {
            records.push(fetch_record(self.source.as_ref(), symbol).await?);
        }

        Ok(Snapshot::new(records))
    }

    /// Sweep and publish back to back. Returns only with the fatal error that
    /// ended it.
    pub(super) async fn run(&self, working_set: &[Symbol], publisher: &Publisher<Snapshot>) -> Error {
        let mut sweeps: u64 = 0;
        loop {
            let started = Instant::now();
            let snapshot = match self.sweep(working_set).await {
                Ok(snapshot) => snapshot,
                Err(e) => return e,
            };
            let elapsed = started.elapsed();
            let records = snapshot.len();

            publisher.publish(snapshot);
            sweeps += 1;
            if sweeps == 1 {
                info!(records, ?elapsed, "First snapshot published");
            } else {
                debug!(sweeps, records, ?elapsed, "Snapshot published");
            }

            self.pace(elapsed).await;
        }
    }

    async fn pace(&self, elapsed: Duration) {
        match self.min_sweep_interval.checked_sub(elapsed) {
            Some(rest) if !rest.is_zero() => tokio::time::sleep(rest).await,
            _ => tokio::task::yield_now().await,
        }
    }
}
