//! Tracing subscriber setup.
//!
//! Command-line and web front ends log to stderr. The terminal UI owns the
//! screen, so it logs to a file instead.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::LOG_FILE_ENV;

const LOG_FILE_NAME: &str = "duck-attire.log";

fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into())
}

/// Initializes stderr logging. `RUST_LOG` wins over `verbose`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_cli_logging(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Resolves the TUI log file from an explicit override or the config directory.
#[must_use]
pub fn resolve_log_path(env_override: Option<OsString>, config_dir: &Path) -> PathBuf {
    env_override
        .filter(|value| !value.is_empty())
        .map_or_else(|| config_dir.join(LOG_FILE_NAME), PathBuf::from)
}

/// Path the TUI logs to, honoring `DUCK_ATTIRE_LOG`.
pub fn log_path() -> Result<PathBuf> {
    Ok(resolve_log_path(
        std::env::var_os(LOG_FILE_ENV),
        &Config::config_dir()?,
    ))
}

/// Initializes file logging for the terminal UI and returns the log path.
pub fn init_tui_logging() -> Result<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context(format!(
            "Failed to create log directory: {}",
            parent.display()
        ))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .context(format!("Failed to open log file: {}", path.display()))?;

    let _ = tracing_subscriber::registry()
        .with(env_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file),
        )
        .try_init();

    Ok(path)
}
