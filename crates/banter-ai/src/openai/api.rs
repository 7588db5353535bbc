//! AiClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Message};

use super::client::{classify_status, classify_transport, parse_body, OpenAiClient};

#[async_trait]
impl AiClient for OpenAiClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages);

        debug!(model = %self.config.model, messages = messages.len(), "Chat completion request");

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &text));
        }

        // A timeout can still fire while the body streams in.
        let bytes = response.bytes().await.map_err(classify_transport)?;

        self.parse_response(parse_body(&bytes)?)
    }
}
