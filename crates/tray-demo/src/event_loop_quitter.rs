use crate::LoopEvent;

use tao::event_loop::EventLoopProxy;
use tracing::warn;
use tray_demo_core::ProcessControl;

/// Quits by posting [`LoopEvent::Quit`] to the main event loop.
pub struct EventLoopQuitter {
    proxy: EventLoopProxy<LoopEvent>,
}

impl EventLoopQuitter {
    /// Wrap a proxy for the running event loop.
    pub fn new(proxy: EventLoopProxy<LoopEvent>) -> Self {
        Self { proxy }
    }
}

impl ProcessControl for EventLoopQuitter {
    fn quit(&self) {
        if self.proxy.send_event(LoopEvent::Quit).is_err() {
            warn!("Event loop already closed");
        }
    }
}
