//! Timer driving a [`TickerCycle`] on tokio
//!
//! The runner is started once and lives until its handle is stopped or
//! dropped, mirroring a component's mount/unmount lifecycle. Observers read
//! the highlighted index from a watch channel.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::{TickerCycle, TICKER_INTERVAL_MS};

/// Configures and starts the ticker timer
#[derive(Debug, Clone, Copy)]
pub struct TickerRunner {
    len: usize,
    period: Duration,
}

impl TickerRunner {
    /// Runner over `len` items with the default 3 s period
    pub fn new(len: usize) -> Self {
        Self {
            len,
            period: Duration::from_millis(TICKER_INTERVAL_MS),
        }
    }

    /// Override the period between advances
    pub fn period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Spawn the timer task.
    ///
    /// The first advance happens one full period after start. Must be called
    /// from within a tokio runtime.
    pub fn start(self) -> TickerHandle {
        let (tx, rx) = watch::channel(0usize);
        let period = self.period;
        let mut cycle = TickerCycle::new(self.len);

        tracing::debug!(len = self.len, period_ms = period.as_millis() as u64, "ticker started");

        let task = tokio::spawn(async move {
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                timer.tick().await;
                let index = cycle.advance();
                tracing::debug!(index, "ticker tick");

                if tx.send(index).is_err() {
                    // Every receiver is gone, including the handle's
                    break;
                }
            }
        });

        TickerHandle { task, index: rx }
    }
}

/// Owner of a running ticker timer. Dropping the handle cancels the timer.
#[derive(Debug)]
pub struct TickerHandle {
    task: JoinHandle<()>,
    index: watch::Receiver<usize>,
}

impl TickerHandle {
    /// Currently highlighted index
    pub fn index(&self) -> usize {
        *self.index.borrow()
    }

    /// A receiver notified on every advance
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Cancel the timer
    pub fn stop(self) {
        // Drop does the work
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("ticker stopped");
    }
}
