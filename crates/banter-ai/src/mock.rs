//! Test doubles: a scripted `AiClient` and a recording `Pause` that share
//! one timeline so tests can assert the exact order of waits and calls.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::retry::Pause;
use crate::{AiClient, AiError, AiResponse, Message, TokenUsage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    Pause(Duration),
    Attempt,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Timeline(Arc<Mutex<Vec<Step>>>);

impl Timeline {
    fn push(&self, step: Step) {
        self.0.lock().unwrap().push(step);
    }

    pub(crate) fn steps(&self) -> Vec<Step> {
        self.0.lock().unwrap().clone()
    }

    pub(crate) fn attempts(&self) -> usize {
        self.steps().iter().filter(|s| **s == Step::Attempt).count()
    }

    pub(crate) fn pauses(&self) -> Vec<Duration> {
        self.steps()
            .into_iter()
            .filter_map(|s| match s {
                Step::Pause(d) => Some(d),
                Step::Attempt => None,
            })
            .collect()
    }
}

pub(crate) struct RecordingPause(Timeline);

impl RecordingPause {
    pub(crate) fn new(timeline: &Timeline) -> Self {
        Self(timeline.clone())
    }
}

#[async_trait]
impl Pause for RecordingPause {
    async fn pause(&self, duration: Duration) {
        self.0.push(Step::Pause(duration));
    }
}

/// Replays a fixed script of outcomes; once the script runs out it keeps
/// returning the `fallback` outcome.
#[derive(Clone)]
pub(crate) struct ScriptedClient {
    timeline: Timeline,
    script: Arc<Mutex<VecDeque<Result<AiResponse, AiError>>>>,
    fallback: fn() -> Result<AiResponse, AiError>,
    received: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl ScriptedClient {
    pub(crate) fn new(timeline: &Timeline, script: Vec<Result<AiResponse, AiError>>) -> Self {
        Self {
            timeline: timeline.clone(),
            script: Arc::new(Mutex::new(script.into())),
            fallback: || Err(AiError::RateLimited),
            received: Arc::default(),
        }
    }

    pub(crate) fn with_fallback(mut self, fallback: fn() -> Result<AiResponse, AiError>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Every message list the client was called with, in call order.
    pub(crate) fn received(&self) -> Vec<Vec<Message>> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        self.timeline.push(Step::Attempt);
        self.received.lock().unwrap().push(messages.to_vec());
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(self.fallback)
    }
}

pub(crate) fn reply(text: &str) -> Result<AiResponse, AiError> {
    Ok(AiResponse {
        content: text.to_string(),
        usage: TokenUsage {
            input_tokens: 10,
            output_tokens: 4,
        },
    })
}
