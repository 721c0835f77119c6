//! Fixed-cadence tick driver.
//!
//! The schedule core is pure; this is the only place that owns a timer.
//! Each tick re-samples the wall clock instead of incrementing an
//! accumulator, so delayed or missed ticks self-correct on the next one.
//! Stopping through the handle is immediate: the shutdown branch is polled
//! before the timer, so no callback runs after `stop` returns. Dropping the
//! handle stops the ticker as well.

use chrono::{Local, NaiveDateTime};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::{self, MissedTickBehavior};

/// Whether the tick loop keeps running after a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

/// A cancellable periodic tick loop.
pub struct Ticker {
    period: Duration,
    shutdown: oneshot::Receiver<()>,
}

/// Stops the associated [`Ticker`].
pub struct TickerHandle {
    shutdown: Option<oneshot::Sender<()>>,
}

impl TickerHandle {
    /// Stops the ticker; no tick callback fires afterwards.
    pub fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

impl Ticker {
    pub fn new(period: Duration) -> (Self, TickerHandle) {
        let (tx, rx) = oneshot::channel();
        (Self { period, shutdown: rx }, TickerHandle { shutdown: Some(tx) })
    }

    /// One-second ticker, the cadence every display surface uses.
    pub fn per_second() -> (Self, TickerHandle) {
        Self::new(Duration::from_secs(1))
    }

    /// Runs `on_tick` once per period until stopped.
    ///
    /// The callback receives the freshly sampled local wall-clock time and
    /// can end the loop itself by returning [`TickFlow::Stop`].
    pub async fn run<F>(mut self, mut on_tick: F)
    where
        F: FnMut(NaiveDateTime) -> TickFlow,
    {
        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                biased;
                _ = &mut self.shutdown => break,
                _ = interval.tick() => {
                    if on_tick(Local::now().naive_local()) == TickFlow::Stop {
                        break;
                    }
                }
            }
        }
    }
}
