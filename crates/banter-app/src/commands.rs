//! REPL input parsing.

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line; ignored.
    Empty,
    Quit,
    Clear,
    History,
    Usage,
    Help,
    /// A slash command we don't know.
    Unknown(String),
    /// A chat message for the model.
    Message(String),
}

pub const HELP: &str = "\
Commands:
  /history   show the full transcript
  /clear     forget the conversation (keeps the system prompt)
  /usage     show token usage for this session
  /help      show this help
  /quit      exit (also /exit or Ctrl-D)";

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Command::Message(line.to_string());
        };
        match rest.split_whitespace().next().unwrap_or("") {
            "quit" | "exit" => Command::Quit,
            "clear" => Command::Clear,
            "history" => Command::History,
            "usage" => Command::Usage,
            "help" | "?" => Command::Help,
            other => Command::Unknown(other.to_string()),
        }
    }
}
