//! Plain-text transcript rendering.
//!
//! Consumes a read-only slice of turns: user turns are right-aligned,
//! assistant turns left-aligned, each under a header carrying the
//! speaker and (optionally) an `HH:MM` timestamp. System turns are not
//! shown.

use banter_ai::{Role, Turn};
use banter_config::schema::DisplayConfig;

#[derive(Debug, Clone, Copy)]
pub struct TranscriptStyle {
    pub width: usize,
    pub show_timestamps: bool,
}

impl From<&DisplayConfig> for TranscriptStyle {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            width: config.width as usize,
            show_timestamps: config.show_timestamps,
        }
    }
}

impl TranscriptStyle {
    /// Widest a single bubble line may get.
    fn bubble_width(&self) -> usize {
        (self.width * 3 / 4).max(1)
    }
}

/// Render every visible turn, separated by blank lines.
pub fn render_transcript(turns: &[Turn], style: &TranscriptStyle) -> String {
    turns
        .iter()
        .filter_map(|t| render_turn(t, style))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render one turn, or `None` for turns that are never displayed.
pub fn render_turn(turn: &Turn, style: &TranscriptStyle) -> Option<String> {
    let speaker = match turn.role {
        Role::System => return None,
        Role::User => "you",
        Role::Assistant => "bot",
    };

    let header = if style.show_timestamps {
        format!("{speaker} · {}", turn.timestamp.format("%H:%M"))
    } else {
        speaker.to_string()
    };

    let mut lines = vec![header];
    lines.extend(wrap(&turn.content, style.bubble_width()));

    let width = style.width;
    let rendered: Vec<String> = match turn.role {
        Role::User => lines.iter().map(|l| format!("{l:>width$}")).collect(),
        _ => lines,
    };
    Some(rendered.join("\n"))
}

/// Greedy word wrap; words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        out.push(line);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}
