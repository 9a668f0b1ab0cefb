//! tray-demo core library
//!
//! GUI-free behavior of the tray demo: a two-state window visibility
//! controller with close-to-hide semantics, the tray menu command binder,
//! a cancellable clock that publishes timestamps on a named event channel,
//! and a sample greet service.
//!
//! The host application supplies the window and process handles through the
//! [`WindowHandle`] and [`ProcessControl`] traits.
//!
//! # Example
//!
//! ```no_run
//! use tray_demo_core::{ClockEmitter, EventBus};
//!
//! use tokio::sync::watch;
//!
//! #[tokio::main]
//! async fn main() {
//!     let bus = EventBus::default();
//!     let mut events = bus.subscribe();
//!     let (shutdown_tx, shutdown_rx) = watch::channel(false);
//!
//!     let clock = ClockEmitter::new(bus.clone()).spawn(shutdown_rx);
//!
//!     if let Ok(event) = events.recv().await {
//!         println!("{}: {}", event.name, event.data);
//!     }
//!
//!     let _ = shutdown_tx.send(true);
//!     let _ = clock.await;
//! }
//! ```

mod clock;
mod error;
mod events;
mod greet;
mod tray;
mod visibility;

pub use {
    clock::{ClockEmitter, DEFAULT_TICK_INTERVAL, TIME_EVENT, format_timestamp},
    error::{CoreError, Result as CoreResult},
    events::{AppEvent, DEFAULT_EVENT_CAPACITY, EventBus},
    greet::{DiagnosticSink, GreetService, TracingSink},
    tray::{ProcessControl, TrayCommand, TrayMenuBinder},
    visibility::{VisibilityController, WindowHandle, WindowVisibilityState},
};

#[cfg(test)]
mod tests;
