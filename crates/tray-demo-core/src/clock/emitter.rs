//! Periodic timestamp publisher.
//!
//! Publishes the current wall-clock time on a named event channel once per
//! tick until a shutdown signal is received.

use crate::{EventBus, clock::format_timestamp};

use std::time::Duration;

use chrono::Local;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{info, instrument, trace};

/// Default interval between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Default event channel for timestamps.
pub const TIME_EVENT: &str = "time";

/// Background clock that publishes a formatted timestamp every tick.
///
/// Each tick sleeps a fixed interval after publishing, so drift is not
/// corrected. The loop never stops because nobody is listening; it only
/// stops when the shutdown signal flips to `true` or its sender is dropped.
#[derive(Debug, Clone)]
pub struct ClockEmitter {
    bus: EventBus,
    event_name: String,
    interval: Duration,
}

impl ClockEmitter {
    /// Create an emitter publishing on [`TIME_EVENT`] every [`DEFAULT_TICK_INTERVAL`].
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus,
            event_name: TIME_EVENT.to_string(),
            interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// Override the tick interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Override the event channel name.
    pub fn with_event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = event_name.into();
        self
    }

    /// Channel the emitter publishes on.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Publish one timestamp. Returns the number of subscribers reached.
    pub fn tick(&self) -> usize {
        let now = format_timestamp(&Local::now());
        self.bus.publish(&self.event_name, now)
    }

    /// Run until shutdown. The first tick is published immediately.
    #[instrument(skip_all, fields(event = %self.event_name, interval_ms = self.interval.as_millis()))]
    pub async fn run(self, mut shutdown_rx: watch::Receiver<bool>) {
        info!("Clock emitter started");

        loop {
            if *shutdown_rx.borrow() {
                break;
            }

            let delivered = self.tick();
            trace!(delivered, "Tick published");

            tokio::select! {
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!("Clock emitter stopped");
    }

    /// Spawn [`run`](Self::run) on the current tokio runtime.
    pub fn spawn(self, shutdown_rx: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown_rx))
    }
}
