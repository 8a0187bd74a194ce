//! File logging for the terminal client.
//!
//! The TUI owns stdout and stderr, so every event goes to
//! `<cache dir>/logs/<session>/client.log` instead.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Platform cache directory for logs, falling back to the temp dir.
pub fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "trpg")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("trpg"))
        .join("logs")
}

/// Session directory name, generated from the clock when not configured.
pub fn session_name(session_id: Option<&str>) -> String {
    match session_id {
        Some(id) => id.to_owned(),
        None => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_secs());
            format!("session_{timestamp}")
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the INFO default.
pub fn setup_logging(session_id: Option<&str>) -> Result<PathBuf> {
    let session = session_name(session_id);
    let session_dir = log_directory().join(&session);
    std::fs::create_dir_all(&session_dir)
        .with_context(|| format!("failed to create log directory {}", session_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    // The writer must outlive every log call, so the guard lives until exit.
    std::mem::forget(guard);

    tracing::info!(session = %session, "logging initialized");
    let log_file = session_dir.join("client.log");
    tracing::info!(path = %log_file.display(), "log file");
    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_session_name_is_kept() {
        assert_eq!(session_name(Some("demo")), "demo");
        assert!(session_name(None).starts_with("session_"));
    }

    #[test]
    fn logs_live_under_a_trpg_directory() {
        let dir = log_directory();
        assert!(dir.ends_with("logs"));
        assert!(dir.to_string_lossy().contains("trpg"));
    }
}
