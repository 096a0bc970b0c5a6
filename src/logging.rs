//! File-backed tracing setup.
//!
//! Log lines go to `~/.portfolio/portfolio.log` so they never draw over the
//! terminal UI. Filter with `RUST_LOG` (default `info`).

use crate::constants::{LOG_DIR_NAME, LOG_FILE_NAME};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log file location under a given home directory. Pure path join.
pub fn log_path_in(home_dir: &Path) -> PathBuf {
    home_dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME)
}

/// `~/.portfolio/portfolio.log`. Does not touch the filesystem.
pub fn log_path() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(log_path_in(&home_dir))
}

/// Create the log directory if needed and open the file for appending.
fn open_log_file() -> io::Result<(PathBuf, File)> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Safe to call once per process.
pub fn init() {
    match open_log_file() {
        Ok((path, file)) => {
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter())
                .try_init();
            if installed.is_ok() {
                tracing::info!(path = %path.display(), "logging initialized");
            }
        }
        // No log file: stay silent rather than corrupt the TUI
        Err(_) => {
            let _ = tracing_subscriber::registry().with(env_filter()).try_init();
        }
    }
}
