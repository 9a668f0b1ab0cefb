use crate::{
    AppResult,
    config::{ClockConfig, ServerConfig},
    server::{self, ServerState},
};

use std::{net::TcpListener, time::Duration};

use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, error, info, instrument, warn};
use tray_demo_core::{ClockEmitter, EventBus, GreetService};

const CLOCK_JOIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Background half of the application.
///
/// Runs on the async runtime thread: the clock emitter and the embedded
/// web server. Holds no UI handles, so nothing here touches the window or
/// tray, which stay on the main thread.
pub struct App {
    pub(crate) bus: EventBus,
    pub(crate) greet: GreetService,
    pub(crate) clock: ClockConfig,
    pub(crate) server: ServerConfig,
    pub(crate) listener: TcpListener,
    pub(crate) shutdown_rx: watch::Receiver<bool>,
}

impl App {
    /// Run until the shutdown signal flips, then join the clock.
    ///
    /// Returns the server error if serving fails; the caller treats that as fatal.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) -> AppResult<()> {
        info!("Tray demo background tasks starting");

        let clock = ClockEmitter::new(self.bus.clone())
            .with_interval(self.clock.interval())
            .with_event_name(self.clock.event_name.clone())
            .spawn(self.shutdown_rx.clone());

        let state = ServerState {
            greet: self.greet,
            bus: self.bus,
            shutdown_rx: self.shutdown_rx.clone(),
        };
        let router = server::router(state, self.server.assets_dir.as_deref());

        let served = server::serve(self.listener, router, self.shutdown_rx).await;

        join_clock(clock, served).await
    }
}

/// Wind down the clock once the server has returned.
///
/// After a clean stop the shutdown signal has flipped, so the clock is
/// joined with a timeout. A failed server leaves the signal unflipped; the
/// clock is aborted and the error returned.
pub(crate) async fn join_clock(clock: JoinHandle<()>, served: AppResult<()>) -> AppResult<()> {
    if let Err(e) = served {
        error!(error = ?e, "Web server failed, stopping clock emitter");
        clock.abort();
        return Err(e);
    }

    match tokio::time::timeout(CLOCK_JOIN_TIMEOUT, clock).await {
        Ok(Ok(())) => debug!("Clock emitter stopped cleanly"),
        Ok(Err(e)) => error!(error = ?e, "Clock emitter task panicked"),
        Err(_) => warn!(
            "Clock emitter did not stop within timeout, \
                 will be cleaned up on exit"
        ),
    }

    info!("Tray demo background tasks shut down");

    Ok(())
}
