//! Session struct and history management.

use crate::{Message, Role, TokenUsage};

use super::types::Turn;

/// Number of trailing turns sent with each request unless configured.
pub const DEFAULT_WINDOW_SIZE: usize = 6;

/// A conversation session: append-only turn history seeded with one
/// system turn.
pub struct Session {
    /// Full history, oldest first. `turns[0]` is the seeded system turn.
    pub(super) turns: Vec<Turn>,
    /// Trailing turns sent per request.
    pub(super) window_size: usize,
    /// Cumulative usage over successful replies.
    pub(super) usage: TokenUsage,
}

impl Session {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::system(system_prompt)],
            window_size: DEFAULT_WINDOW_SIZE,
            usage: TokenUsage::default(),
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Append a turn. No deduplication or content validation.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// The last `n` turns in original order (all of them if fewer).
    pub fn window(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    /// Messages for the next request: the configured window, with the
    /// seeded system turn pinned in front once it has slid out.
    pub fn request_messages(&self) -> Vec<Message> {
        let window = self.window(self.window_size);
        let mut msgs = Vec::with_capacity(window.len() + 1);

        if window.len() < self.turns.len() {
            if let Some(system) = self.turns.first().filter(|t| t.role == Role::System) {
                msgs.push(system.to_message());
            }
        }

        msgs.extend(window.iter().map(Turn::to_message));
        msgs
    }

    /// Get the full conversation history.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn usage(&self) -> &TokenUsage {
        &self.usage
    }

    /// Drop every turn except the seeded system turn.
    pub fn clear(&mut self) {
        self.turns.truncate(1);
        self.usage = TokenUsage::default();
    }
}
