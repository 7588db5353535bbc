//! Retry/backoff configuration for remote calls.

use serde::{Deserialize, Serialize};

/// Retry policy settings.
///
/// Every attempt is preceded by `min_delay_secs`. After a transient
/// failure the wait is `min(backoff_base_secs * 2^n, max_backoff_secs)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub min_delay_secs: f64,
    pub max_backoff_secs: u32,
    pub backoff_base_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            min_delay_secs: 2.0,
            max_backoff_secs: 60,
            backoff_base_secs: 1.0,
        }
    }
}
