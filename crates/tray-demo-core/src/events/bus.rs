//! In-process fan-out of named events.

use crate::AppEvent;

use serde_json::Value;
use tokio::sync::broadcast;
use tracing::trace;

/// Number of events a slow subscriber may fall behind before it lags.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Publishes named events to all current subscribers.
///
/// Delivery is fire-and-forget. Publishing with no subscribers drops the
/// event and is not an error. Cloning the bus shares the same channel, and
/// `publish` may be called from any thread.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<AppEvent>,
}

impl EventBus {
    /// Create a bus that buffers up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish `data` on channel `name`.
    ///
    /// Returns the number of subscribers the event reached.
    pub fn publish(&self, name: &str, data: impl Into<Value>) -> usize {
        match self.tx.send(AppEvent::new(name, data)) {
            Ok(delivered) => delivered,
            Err(_) => {
                trace!(event = name, "No subscribers, event dropped");
                0
            }
        }
    }

    /// Subscribe to every event published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}
