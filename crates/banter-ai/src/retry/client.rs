//! `RetryingClient`: the retry loop around a single completion request.

use std::time::Duration;

use banter_common::Notification;
use tracing::{debug, error, warn};

use crate::{AiClient, AiError, AiResponse, Message};

use super::pause::{Pause, TokioPause};
use super::policy::RetryPolicy;

/// Callback receiving user-facing retry and failure notices.
pub type NoticeSink = Box<dyn Fn(Notification) + Send + Sync>;

/// Title of the notice emitted when the retry budget is spent.
pub const EXHAUSTED_NOTICE: &str = "Failed after multiple retries";

/// An `AiClient` wrapped in a retry/backoff policy.
pub struct RetryingClient {
    inner: Box<dyn AiClient>,
    policy: RetryPolicy,
    pause: Box<dyn Pause>,
    on_notice: Option<NoticeSink>,
}

impl RetryingClient {
    pub fn new(inner: impl AiClient + 'static) -> Self {
        Self {
            inner: Box::new(inner),
            policy: RetryPolicy::default(),
            pause: Box::new(TokioPause),
            on_notice: None,
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_pause(mut self, pause: impl Pause + 'static) -> Self {
        self.pause = Box::new(pause);
        self
    }

    pub fn with_notice_sink(mut self, sink: NoticeSink) -> Self {
        self.on_notice = Some(sink);
        self
    }

    /// Request a completion, retrying transient failures.
    ///
    /// Returns `Ok(Some(_))` on success and `Ok(None)` once the retry
    /// budget is exhausted. Failures without a transient kind are returned
    /// as `Err` straight away, without further attempts.
    pub async fn complete(&self, messages: &[Message]) -> Result<Option<AiResponse>, AiError> {
        let max = self.policy.max_retries;

        for attempt in 0..max {
            self.pause.pause(self.policy.min_delay).await;

            debug!(attempt = attempt + 1, max, "Sending completion request");

            let err = match self.inner.send_message(messages).await {
                Ok(response) => return Ok(Some(response)),
                Err(err) => err,
            };

            let Some(kind) = err.transient_kind() else {
                debug!(error = %err, "Non-transient failure, not retrying");
                return Err(err);
            };

            if attempt + 1 >= max {
                warn!(attempt = attempt + 1, max, error = %err, "Final attempt failed");
                break;
            }

            let wait = self.policy.backoff(attempt);
            warn!(
                attempt = attempt + 1,
                max,
                ?wait,
                error = %err,
                "Transient failure, backing off"
            );
            self.notify(Notification::warning(
                kind.notice(),
                format!("Retrying in {}...", format_wait(wait)),
            ));

            self.pause.pause(wait).await;
        }

        error!(max, "Completion failed after exhausting retries");
        self.notify(Notification::error(EXHAUSTED_NOTICE, ""));
        Ok(None)
    }

    fn notify(&self, notification: Notification) {
        if let Some(ref sink) = self.on_notice {
            sink(notification);
        }
    }
}

/// Render a wait as whole seconds when possible, e.g. `4s` or `0.5s`.
pub(crate) fn format_wait(wait: Duration) -> String {
    if wait.subsec_nanos() == 0 {
        format!("{}s", wait.as_secs())
    } else {
        format!("{:.1}s", wait.as_secs_f64())
    }
}
