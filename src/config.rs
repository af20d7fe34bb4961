// src/config.rs
use std::env;
use thiserror::Error;

/// Environment variable holding the debug flag.
pub const DEBUG_ENV_VAR: &str = "DEBUG";

/// Settings for the error reporting helpers.
///
/// Passed explicitly to every helper that needs it; nothing in the crate reads
/// the flag from global state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportConfig {
    debug: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {key}={value:?} is not a boolean")]
    InvalidBool { key: &'static str, value: String },
}

impl ReportConfig {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Build configuration from the process environment. A `.env` file is
    /// loaded first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source. A missing or
    /// malformed `DEBUG` value leaves debug mode off.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = match lookup(DEBUG_ENV_VAR) {
            None => false,
            Some(raw) => parse_bool(DEBUG_ENV_VAR, &raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring debug flag");
                false
            }),
        };
        Self { debug }
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: raw.to_string(),
        }),
    }
}
