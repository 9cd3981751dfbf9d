use std::sync::Arc;

use readygate_core::ReadinessGate;

use crate::config::ReadinessTrigger;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<ReadinessGate>,
    pub trigger: ReadinessTrigger,
    pub index_message: Arc<str>,
}

impl AppState {
    pub fn new(gate: Arc<ReadinessGate>, trigger: ReadinessTrigger, index_message: &str) -> Self {
        Self {
            gate,
            trigger,
            index_message: Arc::from(index_message),
        }
    }
}
