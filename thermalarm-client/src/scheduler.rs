use std::time::Duration;

use futures::future::BoxFuture;
use tokio::time::{self, Interval, MissedTickBehavior};

/// Outcome of waiting on a [`PollScheduler`].
#[derive(Debug)]
pub enum PollEvent<T> {
    /// A tick is due and no cycle is running; carries the tick number
    Due(u64),
    /// The running cycle finished
    Completed(T),
}

/// Fixed-cadence tick source with a single slot for the cycle it triggers.
///
/// The first tick fires immediately. While a cycle occupies the slot no tick
/// is reported, so cycles never overlap; ticks missed meanwhile collapse into
/// one that fires as soon as the slot frees up.
pub struct PollScheduler<T> {
    interval: Interval,
    in_flight: Option<BoxFuture<'static, T>>,
    ticks: u64,
}

impl<T> PollScheduler<T> {
    pub fn new(period: Duration) -> Self {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            interval,
            in_flight: None,
            ticks: 0,
        }
    }

    /// Waits for the next tick or for the running cycle to finish.
    ///
    /// Cancel safe: dropping the returned future keeps a running cycle in
    /// its slot and does not consume a tick.
    pub async fn next(&mut self) -> PollEvent<T> {
        match self.in_flight.as_mut() {
            Some(cycle) => {
                let output = cycle.await;
                self.in_flight = None;
                PollEvent::Completed(output)
            }
            None => {
                self.interval.tick().await;
                self.ticks += 1;
                PollEvent::Due(self.ticks)
            }
        }
    }

    /// Occupies the slot with `cycle`. A cycle still running is dropped.
    pub fn launch(&mut self, cycle: BoxFuture<'static, T>) {
        if self.in_flight.replace(cycle).is_some() {
            tracing::warn!("poll cycle replaced before completion");
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
