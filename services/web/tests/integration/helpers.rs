use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;

use readygate_core::{ManualClock, ReadinessGate};
use readygate_web::config::{DEFAULT_INDEX_MESSAGE, ReadinessTrigger};
use readygate_web::router::build_router;
use readygate_web::state::AppState;

// ── TestApp ──────────────────────────────────────────────────────────────────

/// Router wired to a gate driven by a `ManualClock`.
pub struct TestApp {
    pub server: TestServer,
    pub gate: Arc<ReadinessGate>,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    pub fn new(warmup_secs: u64, trigger: ReadinessTrigger) -> Self {
        let clock = Arc::new(ManualClock::new());
        let gate = Arc::new(ReadinessGate::with_clock(
            Duration::from_secs(warmup_secs),
            clock.clone(),
        ));
        let state = AppState::new(gate.clone(), trigger, DEFAULT_INDEX_MESSAGE);
        let server = TestServer::new(build_router(state)).unwrap();
        Self {
            server,
            gate,
            clock,
        }
    }

    pub fn at(&self, secs: u64) {
        self.clock.set_elapsed(Duration::from_secs(secs));
    }
}
