//! Logging setup for the `bqurl` binary.
//!
//! All events go to `$XDG_STATE_HOME/bqurl/bqurl.log`. Warnings, which are
//! mostly ignored connection parameters, can also be echoed to stderr so a
//! mistyped URL parameter shows up where the URL was typed.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::BqurlConfig;

const DEFAULT_FILTER: &str = "info,bqurl_core=debug,bqurl_cli=debug";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Echo warn-and-above events to stderr in addition to the log file.
    pub echo_warnings: bool,
}

impl From<&BqurlConfig> for LogOptions {
    fn from(cfg: &BqurlConfig) -> Self {
        Self {
            echo_warnings: cfg.warn_unknown_params,
        }
    }
}

pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bqurl")?;
    Ok(xdg_dirs.place_state_file("bqurl.log")?)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs to the state-dir file, plus stderr warnings if `options` asks for them.
///
/// Returns the log file path. Fails if the file cannot be opened or a global
/// subscriber is already set; callers fall back to [`init_logging_stderr`].
pub fn init_logging(options: LogOptions) -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_filter(env_filter());

    let stderr_layer = options.echo_warnings.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .with_filter(LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    tracing::debug!("bqurl logging to {}", path.display());
    Ok(path)
}

/// Warnings to stderr only, for when the log file is unusable.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .with_filter(LevelFilter::WARN),
        )
        .try_init();
}
