//! Tracing configuration and log routing.
//!
//! Every event goes to stdout through a compact formatter and is appended to
//! [`Config::log_file`](crate::config::Config::log_file). `RUST_LOG` wins over the configured
//! fallback filter.
use std::{fs, path::Path, sync::OnceLock};

use crate::config::Config;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the stdout layer and, when the log file can be opened, a file layer.
///
/// The file writer is non‑blocking; its guard lives in a global for the process lifetime.
pub fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let stdout_layer = fmt::layer().with_target(false).compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer);

    match open_log_file(&config.log_file) {
        Some(writer) => {
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false)
                .compact();
            registry.with(file_layer).init();
        }
        None => registry.init(),
    }
}

/// Open `path` for appending, creating its parent directory first.
///
/// Failures are reported on stderr since no subscriber exists yet.
fn open_log_file(path: &Path) -> Option<NonBlocking> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("Failed to create log directory {}: {err}", parent.display());
            return None;
        }
    }

    match fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let _ = LOG_GUARD.set(guard);
            Some(non_blocking)
        }
        Err(err) => {
            eprintln!("Failed to open log file {}: {err}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_log_directories() {
        let root = std::env::temp_dir().join(format!("tea-house-logs-{}", std::process::id()));
        let path = root.join("nested").join("tea-house.log");

        assert!(open_log_file(&path).is_some());
        assert!(path.exists());

        let _ = fs::remove_dir_all(&root);
    }
}
