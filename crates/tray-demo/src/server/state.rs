use tokio::sync::watch;
use tray_demo_core::{EventBus, GreetService};

/// Shared handler state. Cheap to clone.
#[derive(Debug, Clone)]
pub(crate) struct ServerState {
    pub(crate) greet: GreetService,
    pub(crate) bus: EventBus,
    pub(crate) shutdown_rx: watch::Receiver<bool>,
}
