//! The per-turn chat exchange.

use tracing::debug;

use crate::retry::RetryingClient;
use crate::AiError;

use super::manager::Session;
use super::types::Turn;

impl Session {
    /// Append a user turn and request the assistant's reply.
    ///
    /// On success the reply is appended and returned. `Ok(None)` means the
    /// client gave up after its retry budget; nothing is appended for the
    /// failed reply in that case, nor when an error is returned. The user
    /// turn stays in history either way.
    pub async fn chat(
        &mut self,
        client: &RetryingClient,
        user_message: impl Into<String>,
    ) -> Result<Option<String>, AiError> {
        self.append(Turn::user(user_message));

        let messages = self.request_messages();
        debug!(
            history = self.turns.len(),
            sent = messages.len(),
            "Requesting reply"
        );

        let Some(response) = client.complete(&messages).await? else {
            return Ok(None);
        };

        self.usage.add(&response.usage);
        self.append(Turn::assistant(response.content.clone()));
        Ok(Some(response.content))
    }
}
