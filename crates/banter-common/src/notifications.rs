use std::fmt;

use chrono::{DateTime, Local};

/// Severity level for user-facing notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A user-facing notice, e.g. a retry warning or a terminal failure.
///
/// Notices are advisory: whoever emits one keeps going regardless of
/// how (or whether) it gets displayed.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Local>,
}

impl Notification {
    fn new(level: NotificationLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
            created_at: Local::now(),
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, body)
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, body)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NotificationLevel::Info => "info",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        };
        if self.body.is_empty() {
            write!(f, "[{tag}] {}", self.title)
        } else {
            write!(f, "[{tag}] {}: {}", self.title, self.body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_level() {
        assert_eq!(Notification::info("a", "b").level, NotificationLevel::Info);
        assert_eq!(
            Notification::warning("a", "b").level,
            NotificationLevel::Warning
        );
        assert_eq!(Notification::error("a", "b").level, NotificationLevel::Error);
    }

    #[test]
    fn display_includes_tag_title_and_body() {
        let n = Notification::warning("Rate limit hit", "retrying in 4s");
        assert_eq!(n.to_string(), "[warning] Rate limit hit: retrying in 4s");
    }

    #[test]
    fn display_omits_empty_body() {
        let n = Notification::error("Failed after multiple retries", "");
        assert_eq!(n.to_string(), "[error] Failed after multiple retries");
    }
}
