//! Log setup.
//!
//! The terminal belongs to the UI, so log lines go to a file instead of
//! stderr. `RUST_LOG` wins over the configured filter when set.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Where log lines go when no file is configured.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("dankira.log")
}

/// Install the global subscriber. Returns the path being written to.
pub fn init(settings: &LogSettings) -> io::Result<PathBuf> {
    let path = settings.file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(path)
}
