//! Tests for history windowing and the chat exchange.

use std::time::Duration;

use super::*;
use crate::mock::{reply, RecordingPause, ScriptedClient, Timeline};
use crate::retry::{RetryPolicy, RetryingClient};
use crate::{AiError, Role};

fn session_with_turns(n: usize) -> Session {
    let mut session = Session::new("You are a helpful assistant.");
    for i in 0..n {
        session.append(Turn::user(format!("turn {i}")));
    }
    session
}

fn retrying(timeline: &Timeline, scripted: ScriptedClient) -> RetryingClient {
    RetryingClient::new(scripted)
        .with_pause(RecordingPause::new(timeline))
        .with_policy(RetryPolicy {
            min_delay: Duration::ZERO,
            ..RetryPolicy::default()
        })
}

#[test]
fn new_session_is_seeded_with_one_system_turn() {
    let session = Session::new("be nice");
    assert_eq!(session.turn_count(), 1);
    assert_eq!(session.turns()[0].role, Role::System);
    assert_eq!(session.turns()[0].content, "be nice");
    assert_eq!(session.window_size(), DEFAULT_WINDOW_SIZE);
}

#[test]
fn window_returns_min_len_n_trailing_turns_in_order() {
    for len in 0..12 {
        let session = session_with_turns(len);
        let total = session.turn_count();
        for n in 0..15 {
            let window = session.window(n);
            assert_eq!(window.len(), n.min(total));
            assert_eq!(window, &session.turns()[total - window.len()..]);
        }
    }
}

#[test]
fn window_does_not_mutate_history() {
    let session = session_with_turns(10);
    let _ = session.window(3);
    assert_eq!(session.turn_count(), 11);
}

#[test]
fn append_keeps_duplicates() {
    let mut session = Session::new("sys");
    session.append(Turn::user("same"));
    session.append(Turn::user("same"));
    assert_eq!(session.turn_count(), 3);
}

#[test]
fn request_messages_within_window_include_system_once() {
    let session = session_with_turns(3);
    let msgs = session.request_messages();
    assert_eq!(msgs.len(), 4);
    assert_eq!(msgs[0].role, Role::System);
    assert_eq!(msgs.iter().filter(|m| m.role == Role::System).count(), 1);
}

#[test]
fn request_messages_pin_system_turn_after_it_slides_out() {
    let session = session_with_turns(10);
    let msgs = session.request_messages();

    assert_eq!(msgs.len(), DEFAULT_WINDOW_SIZE + 1);
    assert_eq!(msgs[0].role, Role::System);
    assert_eq!(msgs[0].content, "You are a helpful assistant.");
    assert_eq!(msgs[1].content, "turn 4");
    assert_eq!(msgs.last().unwrap().content, "turn 9");
}

#[test]
fn request_messages_respect_custom_window() {
    let session = session_with_turns(5).with_window_size(2);
    let msgs = session.request_messages();
    let contents: Vec<_> = msgs.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(
        contents,
        vec!["You are a helpful assistant.", "turn 3", "turn 4"]
    );
}

#[test]
fn clear_keeps_only_system_turn() {
    let mut session = session_with_turns(4);
    session.clear();
    assert_eq!(session.turn_count(), 1);
    assert_eq!(session.turns()[0].role, Role::System);
}

#[test]
fn turn_to_message_strips_timestamp() {
    let turn = Turn::assistant("hello");
    let msg = turn.to_message();
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.content, "hello");
}

#[tokio::test]
async fn chat_appends_user_and_reply_on_success() {
    let timeline = Timeline::default();
    let scripted = ScriptedClient::new(&timeline, vec![reply("Hi!")]);
    let client = retrying(&timeline, scripted.clone());
    let mut session = Session::new("sys");

    let reply = session.chat(&client, "hello").await.unwrap();

    assert_eq!(reply.as_deref(), Some("Hi!"));
    let roles: Vec<_> = session.turns().iter().map(|t| t.role).collect();
    assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant]);
    assert_eq!(session.turns()[2].content, "Hi!");
    assert_eq!(session.usage().total_tokens(), 14);

    let sent = scripted.received();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].len(), 2);
    assert_eq!(sent[0][1].content, "hello");
}

#[tokio::test]
async fn chat_on_exhaustion_appends_no_reply() {
    let timeline = Timeline::default();
    let scripted = ScriptedClient::new(&timeline, vec![]);
    let client = retrying(&timeline, scripted);
    let mut session = Session::new("sys");

    let reply = session.chat(&client, "hello").await.unwrap();

    assert!(reply.is_none());
    assert_eq!(session.turn_count(), 2);
    assert_eq!(session.turns()[1].role, Role::User);
    assert_eq!(timeline.attempts(), 5);
    assert_eq!(session.usage().total_tokens(), 0);
}

#[tokio::test]
async fn chat_propagates_unclassified_error_without_reply() {
    let timeline = Timeline::default();
    let scripted = ScriptedClient::new(&timeline, vec![Err(AiError::ParseError("eof".into()))]);
    let client = retrying(&timeline, scripted);
    let mut session = Session::new("sys");

    let err = session.chat(&client, "hello").await.unwrap_err();

    assert!(matches!(err, AiError::ParseError(_)));
    assert_eq!(session.turn_count(), 2);
    assert_eq!(timeline.attempts(), 1);
}

#[tokio::test]
async fn chat_sends_only_the_window() {
    let timeline = Timeline::default();
    let script = (0..5).map(|i| reply(&format!("reply {i}"))).collect();
    let scripted = ScriptedClient::new(&timeline, script);
    let client = retrying(&timeline, scripted.clone());
    let mut session = Session::new("sys");

    for i in 0..5 {
        session.chat(&client, format!("question {i}")).await.unwrap();
    }

    assert_eq!(session.turn_count(), 11);
    let last = scripted.received().pop().unwrap();
    // pinned system turn + 6 trailing turns
    assert_eq!(last.len(), 7);
    assert_eq!(last[0].role, Role::System);
    assert_eq!(last[1].content, "reply 1");
    assert_eq!(last[6].content, "question 4");
}
