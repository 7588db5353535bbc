//! OpenAI-compatible chat-completion client.
//!
//! Implements the `AiClient` trait against `POST {api_base}/chat/completions`
//! with bearer-token authentication. Non-streaming only.

mod api;
mod client;
mod config;


pub use client::OpenAiClient;
pub use config::OpenAiConfig;
