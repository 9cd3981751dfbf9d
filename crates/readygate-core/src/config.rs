use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Source of configuration values, keyed by environment variable name.
///
/// `std::env::var(..).ok()` in production; a map or closure in tests.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Parse `key` from `env`, using `default` when unset or blank.
pub fn parse_or<T, E>(env: &E, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    E: EnvSource + ?Sized,
{
    match env.get(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                key,
                value: raw,
                reason: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}

/// String value of `key`, or `default` when unset.
pub fn string_or<E>(env: &E, key: &str, default: &str) -> String
where
    E: EnvSource + ?Sized,
{
    env.get(key).unwrap_or_else(|| default.to_owned())
}
