//! The pause seam used between attempts.

use std::time::Duration;

use async_trait::async_trait;

/// Something that waits for a duration.
///
/// Production code sleeps on the tokio timer; tests record the requested
/// durations instead of waiting.
#[async_trait]
pub trait Pause: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPause;

#[async_trait]
impl Pause for TokioPause {
    async fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
