//! Filename extraction from URL path.

/// Returns the final segment of the URL path (text after the last `/`).
///
/// The segment is taken from the parsed, serialized path: existing escapes
/// stay as they are and non-ASCII characters come back percent-encoded.
///
/// Returns `None` if the URL cannot be parsed, the path is empty or ends in `/`,
/// or the segment is `.`/`..` and therefore not a usable file name.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
