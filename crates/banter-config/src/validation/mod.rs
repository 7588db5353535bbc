//! Full configuration validation.
//!
//! Checks numeric ranges and required strings, collecting every
//! violation into a single `ConfigError`.

mod helpers;


use crate::schema::BanterConfig;
use banter_common::ConfigError;

use helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BanterConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_model(&mut errors, config);
    validate_retry(&mut errors, config);
    validate_range(
        &mut errors,
        "history.window_size",
        config.history.window_size,
        1,
        1000,
    );
    validate_range(&mut errors, "display.width", config.display.width, 20, 400);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_model(errors: &mut Vec<String>, config: &BanterConfig) {
    let model = &config.model;
    validate_non_empty(errors, "model.api_base", &model.api_base);
    validate_non_empty(errors, "model.model", &model.model);
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 2.0);
    validate_range(errors, "model.max_tokens", model.max_tokens, 1, 128_000);
    validate_range(
        errors,
        "model.request_timeout_secs",
        model.request_timeout_secs,
        1,
        600,
    );
}

fn validate_retry(errors: &mut Vec<String>, config: &BanterConfig) {
    let retry = &config.retry;
    validate_range(errors, "retry.max_retries", retry.max_retries, 1, 20);
    validate_range_f64(errors, "retry.min_delay_secs", retry.min_delay_secs, 0.0, 60.0);
    validate_range(
        errors,
        "retry.max_backoff_secs",
        retry.max_backoff_secs,
        1,
        3600,
    );
    validate_range_f64(
        errors,
        "retry.backoff_base_secs",
        retry.backoff_base_secs,
        0.0,
        60.0,
    );
}
