//! Shared building blocks for readygate services: the readiness gate, its
//! clock, HTTP error type, env config helpers, tracing and middleware.

pub mod clock;
pub mod config;
pub mod error;
pub mod gate;
pub mod health;
pub mod middleware;
pub mod tracing;

pub use clock::{Clock, ManualClock, SystemClock};
pub use gate::ReadinessGate;
pub use health::{HealthReport, HealthStatus};
