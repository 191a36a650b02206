//! Host configuration loaded from environment variables.
//!
//! DESIGN
//! ======
//! Every setting has a default so a bare `cargo leptos watch` works against a
//! backend on `localhost:8080`. Parsing runs over a lookup function rather
//! than the process environment directly, which keeps it deterministic under
//! test.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, info};

pub const PORT_VAR: &str = "PORT";
pub const API_URL_VAR: &str = "CASHFLOW_API_URL";
pub const PROXY_TIMEOUT_VAR: &str = "CASHFLOW_PROXY_TIMEOUT_SECS";

const DEFAULT_PORT: &str = "3000";
const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_PROXY_TIMEOUT_SECS: &str = "30";

/// Errors raised while assembling host configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable was set to something unusable.
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid { key: &'static str, value: String, reason: String },

    /// The `[package.metadata.leptos]` section could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

/// Settings for the SSR host and its backend proxy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub api_url: String,
    pub proxy_timeout: Duration,
}

impl HostConfig {
    /// Load `.env` if present, then read the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!(error = %e, ".env not loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a value is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = try_load::<u16, _>(&lookup, PORT_VAR, DEFAULT_PORT)?;
        let api_url = parse_api_url(&load(&lookup, API_URL_VAR, DEFAULT_API_URL))?;
        let timeout_secs = try_load::<u64, _>(&lookup, PROXY_TIMEOUT_VAR, DEFAULT_PROXY_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: PROXY_TIMEOUT_VAR,
                value: timeout_secs.to_string(),
                reason: "must be at least 1 second".into(),
            });
        }
        Ok(Self { port, api_url, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn load<F>(lookup: &F, key: &'static str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
        Some(value) => value,
        None => {
            info!("{key} not set, using default: {default}");
            default.to_owned()
        }
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = load(lookup, key, default);
    value.parse().map_err(|e: T::Err| ConfigError::Invalid { key, value, reason: e.to_string() })
}

fn parse_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ConfigError::Invalid {
            key: API_URL_VAR,
            value: raw.to_owned(),
            reason: "expected an http(s) origin such as http://localhost:8080".into(),
        });
    }
    Ok(trimmed.to_owned())
}
