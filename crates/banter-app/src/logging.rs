//! Log filter construction and subscriber setup.
//!
//! The subscriber is installed before the config is read so loader events
//! are not lost. Base filter: `RUST_LOG` when set, otherwise the banter
//! crates at the config's `[logging] level`. `--log-level` directives are
//! added on top of either.

use banter_config::schema::LogLevel;
use tracing::warn;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Crates whose events the default log filter lets through.
const LOG_TARGETS: [&str; 3] = ["banter", "banter_ai", "banter_config"];

pub(crate) struct LogFilter {
    pub(crate) filter: EnvFilter,
    /// `--log-level` directives that failed to parse.
    pub(crate) rejected: Vec<String>,
}

pub(crate) fn default_directives(level: LogLevel) -> String {
    let level = level.as_directive();
    LOG_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

pub(crate) fn build_filter(
    rust_log: Option<&str>,
    cli: Option<&str>,
    level: LogLevel,
) -> LogFilter {
    let mut filter = match rust_log {
        Some(env) => EnvFilter::new(env),
        None => EnvFilter::new(default_directives(level)),
    };

    let mut rejected = Vec::new();
    let directives = cli
        .into_iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty());
    for raw in directives {
        match raw.parse::<Directive>() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(_) => rejected.push(raw.to_string()),
        }
    }

    LogFilter { filter, rejected }
}

/// Handle for adjusting the installed filter once the config is known.
pub(crate) struct Logging {
    handle: reload::Handle<EnvFilter, Registry>,
    rust_log: Option<String>,
    cli: Option<String>,
}

/// Install the global subscriber, writing to stderr.
pub(crate) fn init(cli: Option<&str>) -> Logging {
    let rust_log = std::env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty());
    let LogFilter { filter, rejected } = build_filter(rust_log.as_deref(), cli, LogLevel::Info);

    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    for directive in &rejected {
        warn!(%directive, "ignoring invalid --log-level directive");
    }

    Logging {
        handle,
        rust_log,
        cli: cli.map(String::from),
    }
}

impl Logging {
    /// Rebase the filter on the config's level. No-op when `RUST_LOG` is set.
    pub(crate) fn apply_config_level(&self, level: LogLevel) {
        if self.rust_log.is_some() {
            return;
        }
        let LogFilter { filter, .. } = build_filter(None, self.cli.as_deref(), level);
        if let Err(e) = self.handle.reload(filter) {
            warn!("failed to apply configured log level: {e}");
        }
    }
}
