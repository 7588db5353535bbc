//! Conversation session management.
//!
//! A `Session` owns the turn history for one interactive conversation,
//! derives the trailing request window from it, and runs one
//! user-turn/reply exchange at a time through a `RetryingClient`.

mod chat;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::{Session, DEFAULT_WINDOW_SIZE};
pub use types::Turn;
