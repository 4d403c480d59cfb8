//! Interval scheduler for scrape cycles.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::collector::Collector;

/// Drives scrape cycles on a fixed interval, one at a time.
///
/// A failed cycle is logged and skipped; the published snapshot keeps the
/// data of the last successful cycle and the next tick scrapes again.
pub struct Poller {
    collector: Collector,
    period: Duration,
}

impl Poller {
    pub fn new(collector: Collector, period: Duration) -> Self {
        Self { collector, period }
    }

    /// Runs forever. The caller is expected to have completed one
    /// synchronous scrape before spawning this, so the first tick here is
    /// consumed without scraping.
    pub async fn run(self) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if let Err(err) = self.collector.scrape().await {
                log::error!("scrape cycle failed: {err}");
            }
        }
    }
}
