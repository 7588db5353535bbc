//! Configuration schema types for Banter.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod display;
mod history;
mod model;
mod retry;
mod system;

pub use display::*;
pub use history::*;
pub use model::*;
pub use retry::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Banter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct BanterConfig {
    pub model: ModelConfig,
    pub retry: RetryConfig,
    pub history: HistoryConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_model() {
        let config = BanterConfig::default();
        assert_eq!(config.model.api_base, "https://api.openai.com/v1");
        assert_eq!(config.model.model, "gpt-4o-mini");
        assert!((config.model.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.model.max_tokens, 500);
        assert_eq!(config.model.request_timeout_secs, 60);
    }

    #[test]
    fn default_config_has_correct_retry() {
        let config = BanterConfig::default();
        assert_eq!(config.retry.max_retries, 5);
        assert!((config.retry.min_delay_secs - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.retry.max_backoff_secs, 60);
        assert!((config.retry.backoff_base_secs - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_correct_history() {
        let config = BanterConfig::default();
        assert_eq!(config.history.window_size, 6);
        assert_eq!(config.history.system_prompt, "You are a helpful assistant.");
    }

    #[test]
    fn default_config_has_correct_display_and_logging() {
        let config = BanterConfig::default();
        assert_eq!(config.display.width, 80);
        assert!(config.display.show_timestamps);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: BanterConfig = toml::from_str(
            r#"
[retry]
max_retries = 3
"#,
        )
        .unwrap();
        assert_eq!(config.retry.max_retries, 3);
        assert!((config.retry.min_delay_secs - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.history.window_size, 6);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: BanterConfig = toml::from_str(
            r#"
[logging]
level = "DEBUG"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_directive(), "debug");
    }
}
