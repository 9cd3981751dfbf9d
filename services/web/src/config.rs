use std::str::FromStr;
use std::time::Duration;

use readygate_core::config::{ConfigError, EnvSource, ProcessEnv, parse_or, string_or};
use readygate_core::tracing::LogFormat;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_INDEX_MESSAGE: &str = "Hello from Python Flask!";

/// What flips the readiness gate to ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadinessTrigger {
    /// Bootstrap marks the gate once the listener is bound.
    #[default]
    Startup,
    /// The first inbound request of any kind marks the gate.
    FirstRequest,
}

impl FromStr for ReadinessTrigger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "startup" => Ok(Self::Startup),
            "first-request" | "first_request" => Ok(Self::FirstRequest),
            other => Err(format!(
                "expected `startup` or `first-request`, got `{other}`"
            )),
        }
    }
}

/// Web service configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// TCP port for the HTTP server (default 8080). Env var: `PORT`.
    pub port: u16,
    /// Warmup window during which `/health` reports `starting`.
    /// Env var: `WARMUP_THRESHOLD_SECS` (default 0).
    pub warmup: Duration,
    /// Env var: `READINESS_TRIGGER` (`startup` | `first-request`).
    pub trigger: ReadinessTrigger,
    /// `message` field returned by `GET /`. Env var: `INDEX_MESSAGE`.
    pub index_message: String,
    /// Env var: `LOG_FORMAT` (`text` | `json`).
    pub log_format: LogFormat,
}

impl WebConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source<E: EnvSource + ?Sized>(env: &E) -> Result<Self, ConfigError> {
        let warmup_secs: u64 = parse_or(env, "WARMUP_THRESHOLD_SECS", 0)?;
        Ok(Self {
            port: parse_or(env, "PORT", DEFAULT_PORT)?,
            warmup: Duration::from_secs(warmup_secs),
            trigger: parse_or(env, "READINESS_TRIGGER", ReadinessTrigger::default())?,
            index_message: string_or(env, "INDEX_MESSAGE", DEFAULT_INDEX_MESSAGE),
            log_format: parse_or(env, "LOG_FORMAT", LogFormat::default())?,
        })
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            warmup: Duration::ZERO,
            trigger: ReadinessTrigger::default(),
            index_message: DEFAULT_INDEX_MESSAGE.to_owned(),
            log_format: LogFormat::default(),
        }
    }
}
