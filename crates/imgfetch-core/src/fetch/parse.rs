//! Parse HTTP response header lines collected by curl.

/// Parse header lines into (name, value) pairs for the final response.
///
/// With redirects curl reports every response's headers in sequence; each
/// status line (`HTTP/...`) starts a new block, so only the last block is kept.
pub(crate) fn parse_headers(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    headers
}
