//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so log output only ever goes to the file
//! named in `[log] file`. Without one, no subscriber is installed.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aiethics_core::LogConfig;

/// Install the global subscriber. Returns `false` when logging is disabled.
pub fn init(config: &LogConfig) -> Result<bool> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    match file_subscriber(config, rust_log.as_deref())? {
        Some(subscriber) => {
            subscriber
                .try_init()
                .context("installing tracing subscriber")?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Build the file subscriber without installing it.
///
/// `rust_log` is the value of `RUST_LOG`, if set. A valid one takes
/// precedence over `config.level`.
pub fn file_subscriber(
    config: &LogConfig,
    rust_log: Option<&str>,
) -> Result<Option<impl Subscriber + Send + Sync + 'static>> {
    let Some(path) = &config.file else {
        return Ok(None);
    };

    let env_filter = level_filter(&config.level, rust_log)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    Ok(Some(
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer),
    ))
}

fn level_filter(level: &str, rust_log: Option<&str>) -> Result<EnvFilter> {
    if let Some(filter) = rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
    {
        return Ok(filter);
    }
    EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))
}
