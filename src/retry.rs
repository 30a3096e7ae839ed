//! Bounded fixed-delay retry for remote operations.
//!
//! Every storage operation is wrapped in [`retry_with_delay`]; the policy
//! decides how many attempts it gets and how long to wait between them.

use std::future::Future;
use std::num::NonZeroU32;
use std::time::Duration;

use tracing::debug;

use crate::api::error::{Result, StorageError};

/// Attempt bound and inter-attempt delay for a wrapped operation.
///
/// `max_attempts` of `None` means the operation runs exactly once with no
/// wrapping at all; `Some(1)` behaves the same way. The delay only applies
/// between attempts, never after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: Option<NonZeroU32>,
    pub delay: Duration,
}

impl RetryPolicy {
    /// Run operations once, never retrying.
    pub const fn none() -> Self {
        Self {
            max_attempts: None,
            delay: Duration::ZERO,
        }
    }

    /// Retry up to `max_attempts` total attempts with `delay` between them.
    /// Zero attempts disables retrying.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: NonZeroU32::new(max_attempts),
            delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Retry a fallible async operation with a fixed delay between attempts.
///
/// Attempts are not classified by default: `is_retryable` receives every
/// error and may veto another attempt. The final attempt's error propagates
/// unchanged.
pub async fn retry_with_delay<T, F, Fut, R>(
    policy: &RetryPolicy,
    mut operation: F,
    is_retryable: R,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    R: Fn(&StorageError) -> bool,
{
    let Some(max_attempts) = policy.max_attempts else {
        return operation().await;
    };

    let mut attempt = 0u32;
    loop {
        attempt += 1;

        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= max_attempts.get() || !is_retryable(&err) {
                    return Err(err);
                }

                debug!(
                    attempt,
                    delay_ms = policy.delay.as_millis() as u64,
                    error = %err,
                    "Retrying after error"
                );

                tokio::time::sleep(policy.delay).await;
            }
        }
    }
}
