//! Embedded HTTP server: front-end assets, the RPC surface and the event channel.
//!
//! The webview loads the front-end from this server. `POST /rpc/*` routes
//! forward to [`GreetService`](tray_demo_core::GreetService) and `GET /events`
//! streams every [`EventBus`](tray_demo_core::EventBus) event over a WebSocket.

mod assets;
mod events;
mod rpc;
mod state;

pub(crate) use state::ServerState;

use crate::{AppError, AppResult};

use std::{net::TcpListener as StdTcpListener, panic::Location, path::Path};

use axum::{
    Router,
    routing::{get, post},
};
use error_location::ErrorLocation;
use tokio::{net::TcpListener, sync::watch};
use tower_http::services::ServeDir;
use tracing::{info, instrument};

/// Build the application router.
///
/// With `assets_dir` set, static files come from disk; otherwise the
/// embedded front-end is served.
pub(crate) fn router(state: ServerState, assets_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/rpc/greet", post(rpc::greet))
        .route("/rpc/sync-check", post(rpc::sync_check))
        .route("/events", get(events::subscribe));

    let app = match assets_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api
            .route("/", get(assets::index))
            .route("/index.html", get(assets::index))
            .route("/main.js", get(assets::script))
            .route("/style.css", get(assets::stylesheet)),
    };

    app.with_state(state)
}

/// Bind the listener on the calling thread so the URL is known before any
/// window loads it.
#[track_caller]
#[instrument]
pub(crate) fn bind(port: u16) -> AppResult<StdTcpListener> {
    let listener = StdTcpListener::bind(("127.0.0.1", port)).map_err(|e| AppError::ServerError {
        reason: format!("Failed to bind 127.0.0.1:{}: {}", port, e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    listener
        .set_nonblocking(true)
        .map_err(|e| AppError::ServerError {
            reason: format!("Failed to configure listener: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(listener)
}

/// Base URL of a bound listener.
#[track_caller]
pub(crate) fn url(listener: &StdTcpListener) -> AppResult<String> {
    let addr = listener.local_addr().map_err(|e| AppError::ServerError {
        reason: format!("Failed to read listener address: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(format!("http://{}", addr))
}

/// Serve `router` until the shutdown signal flips to `true`.
#[instrument(skip_all)]
pub(crate) async fn serve(
    listener: StdTcpListener,
    router: Router,
    mut shutdown_rx: watch::Receiver<bool>,
) -> AppResult<()> {
    let listener = TcpListener::from_std(listener).map_err(|e| AppError::ServerError {
        reason: format!("Failed to register listener with runtime: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    info!(addr = ?listener.local_addr().ok(), "Web server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.wait_for(|stop| *stop).await;
        })
        .await
        .map_err(|e| AppError::ServerError {
            reason: format!("Server stopped with error: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!("Web server stopped");

    Ok(())
}
