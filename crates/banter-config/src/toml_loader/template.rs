//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Banter Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The API key is read from secrets.toml next to this file
# (OPENAI_API_KEY = "...") or from the OPENAI_API_KEY environment variable.

[model]
# api_base = "https://api.openai.com/v1"
# model = "gpt-4o-mini"
# temperature = 0.7          # 0.0-2.0
# max_tokens = 500           # 1-128000
# request_timeout_secs = 60  # 1-600

[retry]
# max_retries = 5            # 1-20 attempts per message
# min_delay_secs = 2.0       # pause before every attempt, 0-60
# max_backoff_secs = 60      # cap for the exponential backoff, 1-3600
# backoff_base_secs = 1.0    # first backoff wait, 0-60

[history]
# window_size = 6            # trailing turns sent per request, 1-1000
# system_prompt = "You are a helpful assistant."

[display]
# width = 80                 # 20-400
# show_timestamps = true

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
}
