//! URL modeling and filename derivation.
//!
//! The local filename is the URL's final path segment, or a digest of the
//! whole URL string when the path has no usable segment.

mod path;

pub use path::filename_from_url_path;

use crate::checksum;

/// Derives the filename under which the payload of `url` is stored.
///
/// Deterministic per URL. Two URLs sharing a final path segment map to the same
/// name; resolving that collision is left to the dedupe/store steps.
///
/// # Examples
///
/// - `derive_filename("http://example.com/cat.jpg", "jpg")` → `"cat.jpg"`
/// - `derive_filename("http://example.com/", "jpg")` → `"<64 hex chars>.jpg"`
pub fn derive_filename(url: &str, fallback_extension: &str) -> String {
    match filename_from_url_path(url) {
        Some(name) => name,
        None => digest_filename(url, fallback_extension),
    }
}

/// Digest-based name: lowercase hex SHA-256 of the URL string plus `.{ext}`.
pub fn digest_filename(url: &str, extension: &str) -> String {
    let digest = checksum::sha256_bytes(url.as_bytes());
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        digest
    } else {
        format!("{}.{}", digest, extension)
    }
}
