//! WebSocket bridge from the event bus to the front-end.

use crate::{AppResult, server::ServerState};

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use tokio::sync::{
    broadcast::{self, error::RecvError},
    watch,
};
use tray_demo_core::AppEvent;
use tracing::{debug, warn};

pub(super) async fn subscribe(ws: WebSocketUpgrade, State(state): State<ServerState>) -> Response {
    // Subscribe before the upgrade completes so no event published after the
    // request is missed.
    let events = state.bus.subscribe();
    let shutdown_rx = state.shutdown_rx.clone();

    ws.on_upgrade(move |socket| forward(socket, events, shutdown_rx))
}

/// Encode an event as a WebSocket text frame.
fn encode(event: &AppEvent) -> AppResult<Message> {
    Ok(Message::Text(event.to_json()?.into()))
}

async fn forward(
    mut socket: WebSocket,
    mut events: broadcast::Receiver<AppEvent>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    debug!("Event subscriber connected");

    loop {
        tokio::select! {
            _ = async { let _ = shutdown_rx.wait_for(|stop| *stop).await; } => break,

            received = events.recv() => match received {
                Ok(event) => {
                    let message = match encode(&event) {
                        Ok(message) => message,
                        Err(e) => {
                            warn!(error = ?e, event = %event.name, "Dropping unencodable event");
                            continue;
                        }
                    };
                    if socket.send(message).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    debug!(skipped, "Event subscriber lagged");
                }
                Err(RecvError::Closed) => break,
            },

            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    let _ = socket.send(Message::Close(None)).await;
    debug!("Event subscriber disconnected");
}
