//! Retry budget and backoff schedule.

use std::time::Duration;

/// Exponent cap so `2^n` never overflows.
const MAX_BACKOFF_EXPONENT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts per request.
    pub max_retries: u32,
    /// Pause before every attempt, including the first.
    pub min_delay: Duration,
    /// Wait before the first retry; doubles with each further retry.
    pub backoff_base: Duration,
    /// Upper bound for any single backoff wait.
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            min_delay: Duration::from_secs(2),
            backoff_base: Duration::from_secs(1),
            max_backoff: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Wait before retry number `retry_index` (0 for the first retry).
    ///
    /// `min(backoff_base * 2^retry_index, max_backoff)`
    #[must_use]
    pub fn backoff(&self, retry_index: u32) -> Duration {
        let factor = 1u32 << retry_index.min(MAX_BACKOFF_EXPONENT);
        self.backoff_base
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}
