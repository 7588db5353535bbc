mod cli;
mod commands;
mod logging;
mod repl;
mod transcript;

use std::process::ExitCode;
use std::time::Duration;

use banter_ai::{OpenAiClient, OpenAiConfig, RetryPolicy, RetryingClient, Session};
use banter_common::{BanterError, Notification};
use banter_config::schema::{ModelConfig, RetryConfig};
use banter_config::BanterConfig;

use crate::transcript::TranscriptStyle;

/// Load environment variables from `./.env` (KEY=VALUE lines).
/// Variables already set in the environment win.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim().trim_start_matches("export ").trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

fn load_config(path: Option<&str>) -> Result<BanterConfig, BanterError> {
    let config = match path {
        Some(path) => banter_config::toml_loader::load_from_path(std::path::Path::new(path))?,
        None => banter_config::load_config()?,
    };
    banter_config::validation::validate(&config)?;
    Ok(config)
}

fn openai_config(model: &ModelConfig, api_key: String) -> OpenAiConfig {
    OpenAiConfig::new(api_key)
        .with_api_base(&model.api_base)
        .with_model(&model.model)
        .with_temperature(model.temperature)
        .with_max_tokens(model.max_tokens)
        .with_request_timeout(Duration::from_secs(u64::from(model.request_timeout_secs)))
}

fn retry_policy(retry: &RetryConfig) -> RetryPolicy {
    let secs = |s: f64| Duration::try_from_secs_f64(s).unwrap_or(Duration::ZERO);
    RetryPolicy {
        max_retries: retry.max_retries,
        min_delay: secs(retry.min_delay_secs),
        backoff_base: secs(retry.backoff_base_secs),
        max_backoff: Duration::from_secs(u64::from(retry.max_backoff_secs)),
    }
}

async fn run(args: cli::Args) -> banter_common::Result<()> {
    let logging = logging::init(args.log_level.as_deref());
    tracing::info!("Banter v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(args.config.as_deref())?;
    logging.apply_config_level(config.logging.level);

    if let Some(model) = args.model {
        config.model.model = model;
    }
    if let Some(window) = args.window {
        config.history.window_size = window;
        banter_config::validation::validate(&config)?;
    }

    let api_key = banter_config::resolve_api_key()?;
    let openai = OpenAiClient::new(openai_config(&config.model, api_key))
        .map_err(|e| BanterError::Ai(e.to_string()))?;
    tracing::info!(model = %config.model.model, "Client ready");

    let client = RetryingClient::new(openai)
        .with_policy(retry_policy(&config.retry))
        .with_notice_sink(Box::new(|n: Notification| println!("{n}")));

    let mut session = Session::new(config.history.system_prompt.clone())
        .with_window_size(config.history.window_size as usize);
    let style = TranscriptStyle::from(&config.display);

    println!(
        "banter · {} · /help for commands, /quit to exit",
        config.model.model
    );
    repl::run(&mut session, &client, &style).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    load_dotenv();
    let args = cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("banter: {e}");
            ExitCode::FAILURE
        }
    }
}
