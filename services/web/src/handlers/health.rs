use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::info;

use readygate_core::{HealthReport, HealthStatus};

use crate::state::AppState;

// ── GET /health ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        // Uptime is only reported while warming up.
        let uptime = match report.status {
            HealthStatus::Starting => Some(report.uptime_label()),
            HealthStatus::NotReady | HealthStatus::Healthy => None,
        };
        Self {
            status: report.status,
            uptime,
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Response {
    info!("health check endpoint accessed");
    let report = state.gate.check_health();
    (
        report.status.status_code(),
        Json(HealthResponse::from(report)),
    )
        .into_response()
}
