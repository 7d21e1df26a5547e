//! Logging init. Events go to a file under the XDG state dir so stdout only
//! carries the per-URL status lines; stderr is used when the file is unavailable.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "imgfetch.log";

/// Where `init_logging` sent log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Install the global subscriber, appending to `~/.local/state/imgfetch/imgfetch.log`.
///
/// Falls back to stderr (default level `warn`) if the state dir cannot be
/// located or written. `RUST_LOG` overrides the default filter in both cases.
pub fn init_logging() -> LogTarget {
    let opened = xdg::BaseDirectories::with_prefix("imgfetch")
        .context("locate XDG state dir")
        .and_then(|dirs| open_log_file(&dirs.get_state_home()));

    match opened {
        Ok((path, file)) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter("info,imgfetch=debug"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
            tracing::info!("imgfetch logging initialized at {}", path.display());
            LogTarget::File(path)
        }
        Err(err) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter("warn"))
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .try_init();
            tracing::debug!("log file unavailable, using stderr: {:#}", err);
            LogTarget::Stderr
        }
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Create `dir` if needed and open its log file for appending.
fn open_log_file(dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;
    Ok((path, file))
}
