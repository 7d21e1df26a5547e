use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Directory (relative to the working directory) that receives fetched images.
pub const DEFAULT_OUTPUT_DIR: &str = "Fetched_Images";

/// Extension appended to digest-based filenames when a URL has no path segment.
pub const DEFAULT_FALLBACK_EXTENSION: &str = "jpg";

/// Whole-request timeout for a single fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration loaded from `~/.config/imgfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Where fetched images are written. Relative paths resolve against the working directory.
    pub output_dir: PathBuf,
    /// Timeout for one GET (connect + transfer), in seconds.
    pub timeout_secs: u64,
    /// Extension (without dot) for filenames derived from a URL digest.
    pub fallback_extension: String,
    /// Optional User-Agent header; libcurl sends none when unset.
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fallback_extension: DEFAULT_FALLBACK_EXTENSION.to_string(),
            user_agent: None,
        }
    }
}

impl FetchConfig {
    /// Default config writing into `output_dir`.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
