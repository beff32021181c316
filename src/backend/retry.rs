//! Retry policy for backend requests.

use crate::config::BackendConfig;
use crate::error::BackendError;
use std::time::Duration;

/// Bounded retry policy used by `HttpBackend`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct RetryPolicy {
    /// Upper bound on total attempts, including the initial request.
    pub(super) max_attempts: u32,
    /// Base delay used for exponential backoff.
    pub(super) initial_backoff: Duration,
    /// Maximum allowed delay between retry attempts.
    pub(super) max_backoff: Duration,
}

impl RetryPolicy {
    pub(super) fn from_config(config: &BackendConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            initial_backoff: config.initial_backoff(),
            max_backoff: config.max_backoff(),
        }
    }

    /// Decide whether a failed draw or search is worth sending again.
    ///
    /// Only failures where the backend never produced an answer qualify: it
    /// was unreachable or slow, it shed load with 429, or its HTTP front
    /// (proxy or server) failed with 5xx. Any enveloped reply, `ok` or not,
    /// is the backend's verdict on this request and is returned as-is.
    pub(super) fn should_retry(&self, err: &BackendError, attempt: u32) -> bool {
        if attempt.saturating_add(1) >= self.max_attempts {
            return false;
        }
        match err {
            BackendError::Http(inner) => inner.is_timeout() || inner.is_connect(),
            BackendError::Status { code, .. } => is_transient_status(*code),
            BackendError::NonOk { .. } | BackendError::InvalidResponse(_) => false,
        }
    }

    /// Delay before the next attempt.
    ///
    /// A `Retry-After` sent with a 429 or 503 is followed, bounded to
    /// `1..=300` seconds. Otherwise the delay doubles per attempt from
    /// `initial_backoff` up to `max_backoff`.
    pub(super) fn retry_delay_for(&self, attempt: u32, err: &BackendError) -> Duration {
        if let Some(seconds) = err.retry_after_secs() {
            return Duration::from_secs(seconds.clamp(1, MAX_RETRY_AFTER_SECS));
        }
        let factor = 1u128 << attempt.min(16);
        let millis = self
            .initial_backoff
            .as_millis()
            .saturating_mul(factor)
            .min(self.max_backoff.as_millis());
        Duration::from_millis(u64::try_from(millis).unwrap_or(u64::MAX))
    }
}

/// Ceiling for a server-requested `Retry-After` delay.
const MAX_RETRY_AFTER_SECS: u64 = 300;

fn is_transient_status(code: u16) -> bool {
    code == 429 || (500..=599).contains(&code)
}
