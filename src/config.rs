//! Client configuration from the environment.
//!
//! This module reads the deployment-facing settings: the auth endpoint
//! (credentials embedded as userinfo), the token freshness threshold, and
//! the retry policy.
//!
//! Parsing is a pure function over a lookup closure, so tests never have
//! to mutate the process environment.

use std::time::Duration;

use crate::api::error::{Result, StorageError};
use crate::retry::RetryPolicy;

/// Auth endpoint URL, credentials included as userinfo. Required.
pub const ENV_AUTH_URL: &str = "SKYSTASH_AUTH_URL";

/// Seconds of remaining token lifetime below which a session counts as
/// stale.
pub const ENV_AUTH_THRESHOLD: &str = "SKYSTASH_AUTH_THRESHOLD";

/// Total attempts for the retry wrapper; `0` disables retrying.
pub const ENV_MAX_RETRY: &str = "SKYSTASH_MAX_RETRY";

/// Seconds to wait between retry attempts.
pub const ENV_RETRY_DELAY: &str = "SKYSTASH_RETRY_DELAY";

const DEFAULT_THRESHOLD_SECS: u64 = 5;
const DEFAULT_MAX_RETRY: u32 = 2;
const DEFAULT_RETRY_DELAY_SECS: u64 = 2;

#[derive(Debug, Clone)]
pub struct Config {
    pub auth_url: String,
    pub threshold: Duration,
    pub retry: RetryPolicy,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from any name-to-value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_url = lookup(ENV_AUTH_URL)
            .ok_or_else(|| StorageError::Config(format!("{ENV_AUTH_URL} is not set")))?;

        let threshold = parse_var(&lookup, ENV_AUTH_THRESHOLD, DEFAULT_THRESHOLD_SECS)?;
        let max_retry = parse_var(&lookup, ENV_MAX_RETRY, DEFAULT_MAX_RETRY)?;
        let delay = parse_var(&lookup, ENV_RETRY_DELAY, DEFAULT_RETRY_DELAY_SECS)?;

        Ok(Self {
            auth_url,
            threshold: Duration::from_secs(threshold),
            retry: RetryPolicy::new(max_retry, Duration::from_secs(delay)),
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| StorageError::Config(format!("{name} must be an integer, got {raw:?}"))),
        None => Ok(default),
    }
}
