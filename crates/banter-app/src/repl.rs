//! The interactive loop: read a line, run one exchange, print the result.

use std::io::Write;

use banter_ai::{RetryingClient, Session};
use banter_common::{Notification, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, error};

use crate::commands::{Command, HELP};
use crate::transcript::{render_transcript, render_turn, TranscriptStyle};

const PROMPT: &str = "you> ";

/// One raw read from the input stream.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Eof,
    Line(String),
    /// The line was not valid UTF-8 and has been discarded.
    Invalid,
}

/// Read one newline-terminated line, surviving bytes that are not UTF-8.
async fn read_input<R: AsyncBufRead + Unpin>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> std::io::Result<Input> {
    buf.clear();
    if reader.read_until(b'\n', buf).await? == 0 {
        return Ok(Input::Eof);
    }
    match std::str::from_utf8(buf) {
        Ok(line) => Ok(Input::Line(line.trim_end_matches(['\n', '\r']).to_string())),
        Err(_) => Ok(Input::Invalid),
    }
}

/// Run until EOF or `/quit`. The session is owned by the caller.
pub async fn run(
    session: &mut Session,
    client: &RetryingClient,
    style: &TranscriptStyle,
) -> Result<()> {
    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut buf = Vec::new();

    loop {
        prompt()?;
        let line = match read_input(&mut stdin, &mut buf).await? {
            Input::Eof => {
                println!();
                break;
            }
            Input::Invalid => {
                println!(
                    "{}",
                    Notification::error("Input ignored", "line is not valid UTF-8")
                );
                continue;
            }
            Input::Line(line) => line,
        };

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Clear => {
                session.clear();
                println!("{}", Notification::info("Conversation cleared", ""));
            }
            Command::History => println!("{}", render_transcript(session.turns(), style)),
            Command::Usage => {
                let usage = session.usage();
                println!(
                    "{} turns in history, {} input + {} output = {} tokens",
                    session.turn_count(),
                    usage.input_tokens,
                    usage.output_tokens,
                    usage.total_tokens()
                );
            }
            Command::Unknown(name) => {
                println!(
                    "{}",
                    Notification::warning(format!("Unknown command /{name}"), "try /help")
                );
            }
            Command::Message(text) => exchange(session, client, style, text).await,
        }
    }

    debug!(turns = session.turn_count(), "Session ended");
    Ok(())
}

async fn exchange(
    session: &mut Session,
    client: &RetryingClient,
    style: &TranscriptStyle,
    text: String,
) {
    println!("thinking…");
    match session.chat(client, text).await {
        Ok(Some(_)) => {
            if let Some(reply) = session.turns().last().and_then(|t| render_turn(t, style)) {
                println!("{reply}");
            }
        }
        // The retry wrapper has already reported exhaustion.
        Ok(None) => {}
        Err(e) => {
            error!(error = %e, "Chat request failed");
            println!("{}", Notification::error("Request failed", e.to_string()));
        }
    }
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(PROMPT.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
