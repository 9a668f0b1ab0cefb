use crate::config::{default_event_name, default_interval_ms};

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Clock emitter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Milliseconds between ticks.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Event channel the timestamp is published on.
    #[serde(default = "default_event_name")]
    pub event_name: String,
}

impl ClockConfig {
    /// Tick interval, never shorter than one millisecond.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            event_name: default_event_name(),
        }
    }
}
