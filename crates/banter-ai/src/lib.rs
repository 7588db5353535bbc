//! AI engine for Banter.
//!
//! Provides an OpenAI-compatible chat-completion client with:
//! - A retry wrapper with capped exponential backoff on transient failures
//! - Session history with a trailing request window
//! - Token usage accounting

pub mod openai;
pub mod retry;
pub mod session;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

pub use openai::{OpenAiClient, OpenAiConfig};
pub use retry::{NoticeSink, Pause, RetryPolicy, RetryingClient, TokioPause};
pub use session::{Session, Turn};

/// A remote chat-completion backend.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Issue exactly one completion request for `messages`.
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

/// A message as transmitted to the remote API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }

    /// Accumulate another call's usage into this one.
    pub fn add(&mut self, other: &TokenUsage) {
        self.input_tokens = self.input_tokens.saturating_add(other.input_tokens);
        self.output_tokens = self.output_tokens.saturating_add(other.output_tokens);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Timeout")]
    Timeout,
    #[error("Service unavailable")]
    ServiceUnavailable,
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure kinds the retry policy treats as transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransientKind {
    RateLimit,
    Api,
    Timeout,
    ServiceUnavailable,
}

impl TransientKind {
    /// Short user-facing text for a retry notice.
    pub fn notice(self) -> &'static str {
        match self {
            TransientKind::RateLimit => "Rate limit hit",
            TransientKind::Api => "API error",
            TransientKind::Timeout => "Request timed out",
            TransientKind::ServiceUnavailable => "Service unavailable",
        }
    }
}

impl AiError {
    /// The transient kind of this error, or `None` if it must not be retried.
    pub fn transient_kind(&self) -> Option<TransientKind> {
        match self {
            AiError::RateLimited => Some(TransientKind::RateLimit),
            AiError::ApiError(_) => Some(TransientKind::Api),
            AiError::Timeout => Some(TransientKind::Timeout),
            AiError::ServiceUnavailable => Some(TransientKind::ServiceUnavailable),
            AiError::Unauthorized(_)
            | AiError::InvalidRequest(_)
            | AiError::NetworkError(_)
            | AiError::ParseError(_)
            | AiError::Config(_) => None,
        }
    }
}
