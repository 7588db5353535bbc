//! Conversation history configuration.

use serde::{Deserialize, Serialize};

/// History window and seed prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of trailing turns sent with each request.
    pub window_size: u32,
    /// Content of the system turn every session starts with.
    pub system_prompt: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            window_size: 6,
            system_prompt: "You are a helpful assistant.".into(),
        }
    }
}
