//! Duplicate detection against the file already at the target path.
//!
//! No index is kept; the existing file is re-read and digested on every check.

use crate::checksum;
use anyhow::Result;
use std::path::Path;

/// True if a file exists at `path` and its SHA-256 equals that of `content`.
///
/// A missing file is never a duplicate. Errors opening or reading an existing
/// file are returned to the caller.
pub fn is_duplicate(path: &Path, content: &[u8]) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let existing = checksum::sha256_path(path)?;
    let incoming = checksum::sha256_bytes(content);
    tracing::debug!(path = %path.display(), %existing, %incoming, "dedupe digests");
    Ok(existing == incoming)
}
