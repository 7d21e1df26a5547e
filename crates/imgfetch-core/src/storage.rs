//! Output directory and file writes.
//!
//! Writes go straight to the final path (no temp file or rename), replacing
//! any existing contents.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create `dir` and its parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))
}

/// Write `payload` to `path`, truncating any existing file.
pub fn write_payload(path: &Path, payload: &[u8]) -> Result<()> {
    fs::write(path, payload).with_context(|| format!("write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = payload.len(), "payload written");
    Ok(())
}
