//! OpenAI client struct, request building, and response parsing.

use std::time::Duration;

use reqwest::StatusCode;

use crate::{AiError, AiResponse, Message, TokenUsage};

use super::config::OpenAiConfig;

/// Longest response-body excerpt carried in an error message.
const ERROR_BODY_LIMIT: usize = 200;

/// OpenAI chat-completion client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }

    /// Build the JSON request body for the chat-completions API.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let msgs: Vec<_> = messages
            .iter()
            .map(|m| serde_json::json!({ "role": m.role, "content": m.content }))
            .collect();

        serde_json::json!({
            "model": self.config.model,
            "messages": msgs,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }

    /// Parse a non-streaming response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| AiError::ParseError("response has no choices[0].message.content".into()))?;

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}

/// Map a non-success HTTP status (and its body) onto an `AiError`.
pub(crate) fn classify_status(status: StatusCode, body: &str) -> AiError {
    let body: String = body.chars().take(ERROR_BODY_LIMIT).collect();
    match status {
        StatusCode::TOO_MANY_REQUESTS => AiError::RateLimited,
        StatusCode::SERVICE_UNAVAILABLE => AiError::ServiceUnavailable,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => AiError::Timeout,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AiError::Unauthorized(format!("HTTP {status}: {body}"))
        }
        s if s.is_client_error() => AiError::InvalidRequest(format!("HTTP {status}: {body}")),
        _ => AiError::ApiError(format!("HTTP {status}: {body}")),
    }
}

/// Decode a success body; only malformed JSON is a `ParseError`.
pub(crate) fn parse_body(bytes: &[u8]) -> Result<serde_json::Value, AiError> {
    serde_json::from_slice(bytes).map_err(|e| AiError::ParseError(e.to_string()))
}

/// Map a transport-level failure onto an `AiError`.
pub(crate) fn classify_transport(err: reqwest::Error) -> AiError {
    if err.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(err.to_string())
    }
}
