use crate::server::ServerState;

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Body of `POST /rpc/greet`.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct GreetRequest {
    #[serde(default)]
    pub(super) name: String,
}

/// Response of `POST /rpc/greet`.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct GreetResponse {
    pub(super) result: String,
}

/// Body of `POST /rpc/sync-check`.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct SyncCheckRequest {
    #[serde(default)]
    pub(super) timestamp: String,
}

#[instrument(skip(state))]
pub(super) async fn greet(
    State(state): State<ServerState>,
    Json(request): Json<GreetRequest>,
) -> Json<GreetResponse> {
    Json(GreetResponse {
        result: state.greet.greet(&request.name),
    })
}

pub(super) async fn sync_check(
    State(state): State<ServerState>,
    Json(request): Json<SyncCheckRequest>,
) -> StatusCode {
    state.greet.sync_check(&request.timestamp);
    StatusCode::NO_CONTENT
}
