use axum::Json;
use serde::Serialize;

// ── GET /readiness ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
}

/// Unconditional readiness probe kept for orchestrators that poll `/readiness`.
pub async fn readiness() -> Json<ReadinessResponse> {
    Json(ReadinessResponse { status: "ready" })
}
