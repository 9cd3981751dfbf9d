//! Startup/readiness gate shared by every health handler.
//!
//! The gate combines two conditions: the process has been up for at least the
//! warmup threshold, and something has explicitly marked it ready. Before the
//! threshold the gate always reports [`HealthStatus::Starting`]; once both
//! conditions hold it reports [`HealthStatus::Healthy`] for the rest of the
//! process lifetime.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::health::{HealthReport, HealthStatus};

#[derive(Debug)]
pub struct ReadinessGate {
    clock: Arc<dyn Clock>,
    started_at: Instant,
    warmup: Duration,
    ready: AtomicBool,
}

impl ReadinessGate {
    /// Create a gate backed by the system clock. The start instant is captured now.
    pub fn new(warmup: Duration) -> Self {
        Self::with_clock(warmup, Arc::new(SystemClock))
    }

    pub fn with_clock(warmup: Duration, clock: Arc<dyn Clock>) -> Self {
        let started_at = clock.now();
        Self {
            clock,
            started_at,
            warmup,
            ready: AtomicBool::new(false),
        }
    }

    /// Flip the gate to ready. Returns `true` only for the call that performed
    /// the transition; later calls are no-ops.
    pub fn mark_ready(&self) -> bool {
        let was_ready = self.ready.swap(true, Ordering::AcqRel);
        if !was_ready {
            info!(
                uptime_secs = self.uptime().as_secs_f64(),
                "service marked ready"
            );
        }
        !was_ready
    }

    pub fn check_health(&self) -> HealthReport {
        let elapsed = self.uptime();
        let status = if elapsed < self.warmup {
            info!(
                uptime_secs = elapsed.as_secs_f64(),
                warmup_secs = self.warmup.as_secs_f64(),
                "service still starting"
            );
            HealthStatus::Starting
        } else if !self.is_ready() {
            HealthStatus::NotReady
        } else {
            HealthStatus::Healthy
        };
        HealthReport { status, elapsed }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn uptime(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started_at)
    }

    pub fn warmup(&self) -> Duration {
        self.warmup
    }
}
