use std::time::Duration;

use axum::http::StatusCode;
use serde::Serialize;

/// Externally observable state of the readiness gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    /// Still inside the warmup window.
    Starting,
    /// Warmup elapsed but the service has not been marked ready.
    NotReady,
    Healthy,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::NotReady => "not-ready",
            Self::Healthy => "healthy",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Starting | Self::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            Self::Healthy => StatusCode::OK,
        }
    }
}

/// Result of a single `ReadinessGate::check_health` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub elapsed: Duration,
}

impl HealthReport {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Uptime rendered as `<N.N>s`, truncated to tenths so a starting
    /// report never shows the threshold itself.
    pub fn uptime_label(&self) -> String {
        let tenths = self.elapsed.as_millis() / 100;
        format!("{}.{}s", tenths / 10, tenths % 10)
    }
}
