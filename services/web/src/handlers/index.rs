use axum::{Json, extract::State};
use serde::Serialize;
use tracing::info;

use crate::state::AppState;

// ── GET / ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub status: &'static str,
}

/// Fixed payload; independent of the readiness gate.
pub async fn index(State(state): State<AppState>) -> Json<IndexResponse> {
    info!("index endpoint accessed");
    Json(IndexResponse {
        message: state.index_message.to_string(),
        status: "running",
    })
}
