use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::{header, Client};

use crate::api::error::{Result, StorageError};

use super::{AUTH_TOKEN, EXPIRE_AUTH_TOKEN};

/// One authenticated session: the issued token, its expiry, the storage
/// endpoint it is valid for, and an HTTP client that sends the token on
/// every request.
///
/// All four fields come from the same credential exchange, so a `Session`
/// in hand is always internally consistent. Clones share the underlying
/// connection pool; the pool closes when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    expires_at: DateTime<Utc>,
    storage_url: String,
    http: Client,
}

impl Session {
    pub(crate) fn new(
        token: String,
        expires_in: i64,
        storage_url: String,
        timeout: Duration,
    ) -> Result<Self> {
        let mut value = header::HeaderValue::from_str(&token)
            .map_err(|_| StorageError::MissingHeader(AUTH_TOKEN))?;
        value.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(AUTH_TOKEN, value);

        // A lifetime the clock cannot represent reads as a malformed header.
        let expires_at = TimeDelta::try_seconds(expires_in)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or(StorageError::MissingHeader(EXPIRE_AUTH_TOKEN))?;

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            token,
            expires_at,
            storage_url,
            http,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Storage endpoint exactly as the auth response announced it.
    pub fn storage_url(&self) -> &str {
        &self.storage_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// True once the remaining token lifetime is within `threshold`.
    pub fn is_stale(&self, threshold: Duration) -> bool {
        let remaining = self.expires_at - Utc::now();
        match remaining.to_std() {
            Ok(left) => left <= threshold,
            Err(_) => true,
        }
    }
}
