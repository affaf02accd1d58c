//! System routes: `/api/ping`

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Build the system router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/ping", get(ping))
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: String,
}

/// Liveness check. The message comes from `PING_MESSAGE`.
async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        message: state.ping_message.clone(),
    })
}
