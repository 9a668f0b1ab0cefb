//! Tray Demo: a tray-resident webview window with a live clock.

mod app;
mod config;
mod error;
mod event_loop_quitter;
mod logging;
mod loop_event;
mod main_window;
mod server;
#[cfg(test)]
mod tests;
mod tray_icon_variant;
mod tray_manager;
mod ui;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    event_loop_quitter::EventLoopQuitter,
    loop_event::LoopEvent,
    main_window::MainWindow,
    tray_icon_variant::TrayIconVariant,
    tray_manager::TrayManager,
    ui::Ui,
};

use crate::config::Config;

use std::{panic::Location, thread::JoinHandle};

use error_location::ErrorLocation;
use tao::{
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy},
};
use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tray_demo_core::{EventBus, GreetService};
use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Application entry point.
fn main() {
    let mut log_guard = logging::init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => exit_fatal(log_guard, "Failed to load config", &e),
    };

    // Bound here so the URL is valid before the webview loads it.
    let listener = match server::bind(config.server.port) {
        Ok(l) => l,
        Err(e) => exit_fatal(log_guard, "Failed to bind web server", &e),
    };
    let url = match server::url(&listener) {
        Ok(u) => u,
        Err(e) => exit_fatal(log_guard, "Failed to resolve web server URL", &e),
    };

    #[allow(unused_mut)]
    let mut event_loop = EventLoopBuilder::<LoopEvent>::with_user_event().build();

    // Accessory apps have no dock icon and no menu bar of their own.
    #[cfg(target_os = "macos")]
    {
        use tao::platform::macos::{ActivationPolicy, EventLoopExtMacOS};
        event_loop.set_activation_policy(ActivationPolicy::Accessory);
    }

    let proxy = event_loop.create_proxy();

    // Menu and tray icon events arrive on toolkit threads; route them to the UI thread.
    let menu_proxy = proxy.clone();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = menu_proxy.send_event(LoopEvent::Menu(event));
    }));
    let tray_proxy = proxy.clone();
    TrayIconEvent::set_event_handler(Some(move |event| {
        let _ = tray_proxy.send_event(LoopEvent::TrayIcon(event));
    }));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let app = App {
        bus: EventBus::default(),
        greet: GreetService::new(),
        clock: config.clock.clone(),
        server: config.server.clone(),
        listener,
        shutdown_rx,
    };
    let mut runtime_thread = Some(spawn_runtime(app, proxy.clone()));

    // UI lives on the main thread - TrayIcon and WebView are !Send on all platforms.
    let mut ui: Option<Ui> = None;

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                match Ui::new(target, proxy.clone(), &config, &url) {
                    Ok(u) => ui = Some(u),
                    Err(e) => {
                        error!(error = ?e, "Failed to create UI");
                        *control_flow = ControlFlow::ExitWithCode(1);
                    }
                }
            }
            Event::WindowEvent {
                window_id,
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if let Some(ui) = ui.as_ref().filter(|ui| ui.owns_window(window_id)) {
                    if !ui.handle_close_requested() {
                        *control_flow = ControlFlow::ExitWithCode(0);
                    }
                }
            }
            Event::UserEvent(LoopEvent::Menu(menu_event)) => {
                if let Some(ui) = &ui {
                    ui.handle_menu_event(&menu_event);
                }
            }
            Event::UserEvent(LoopEvent::TrayIcon(tray_event)) => {
                if let Some(ui) = &ui {
                    ui.handle_tray_icon_event(&tray_event);
                }
            }
            Event::UserEvent(event) => {
                if let Some(code) = event.exit_code() {
                    info!(code, "Leaving event loop");
                    *control_flow = ControlFlow::ExitWithCode(code);
                }
            }
            Event::LoopDestroyed => {
                let _ = shutdown_tx.send(true);
                if let Some(handle) = runtime_thread.take() {
                    if handle.join().is_err() {
                        error!("Runtime thread panicked");
                    }
                }
                drop(ui.take());
                info!("Tray demo exited");
                // Flush the file writer; tao exits the process without unwinding.
                drop(log_guard.take());
            }
            _ => {}
        }
    });
}

/// Log a startup failure, flush the log file and exit with status 1.
fn exit_fatal(log_guard: Option<WorkerGuard>, context: &str, e: &AppError) -> ! {
    error!(error = ?e, "{}", context);
    drop(log_guard);
    std::process::exit(1);
}

/// Spawn the tokio runtime on its own thread and run the background tasks.
/// The window and tray stay on the main thread.
///
/// A background failure is fatal: the event loop is told to exit with status 1.
fn spawn_runtime(app: App, proxy: EventLoopProxy<LoopEvent>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let result = tokio::runtime::Runtime::new()
            .map_err(|e| AppError::RuntimeError {
                reason: format!("Failed to create tokio runtime: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
            .and_then(|rt| rt.block_on(app.run()));

        if let Err(e) = result {
            error!(error = ?e, "Background tasks failed");
            if proxy.send_event(LoopEvent::Fatal).is_err() {
                warn!("Event loop already closed");
            }
        }
    })
}
