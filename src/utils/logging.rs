//! Logging setup for askfile.
//!
//! stdout is the interactive screen, so logs never go to the terminal. A `tracing`
//! subscriber is installed only when a log file is configured, through the
//! `ASKFILE_LOG` environment variable or `general.log_file` in askfile.toml.
//! The level comes from `RUST_LOG` and defaults to [DEFAULT_FILTER].

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "ASKFILE_LOG";
pub const DEFAULT_FILTER: &str = "askfile=info";

/// Picks the log file: the environment variable wins over the config value.
pub fn log_target(configured: Option<&Path>) -> Option<PathBuf> {
    std::env::var_os(LOG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| configured.map(Path::to_path_buf))
}

/// Installs a file-backed subscriber.
/// # Returns
/// `Ok(false)` if no log file is configured or a subscriber was already installed.
pub fn init_tracing(configured: Option<&Path>) -> io::Result<bool> {
    let Some(path) = log_target(configured) else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(path = %path.display(), "logging initialized");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_path_is_used_without_env() {
        if std::env::var_os(LOG_ENV).is_some() {
            return;
        }
        assert_eq!(log_target(None), None);
        assert_eq!(
            log_target(Some(Path::new("/tmp/askfile.log"))),
            Some(PathBuf::from("/tmp/askfile.log"))
        );
    }
}
