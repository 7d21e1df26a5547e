//! Single HTTP GET per URL.
//!
//! Uses the curl crate (libcurl) to fetch the whole response into memory,
//! keeping the final response's status and headers. Redirects are followed.

mod error;
mod parse;

pub use error::FetchError;

use crate::config::FetchConfig;
use std::str;

/// Maximum redirects followed before the transfer fails.
const MAX_REDIRECTIONS: u32 = 10;

/// Response of a successful GET: final status, final headers, full body.
#[derive(Debug, Clone, Default)]
pub struct FetchResponse {
    pub status: u32,
    /// Header (name, value) pairs in arrival order.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Case-insensitive header lookup; the last occurrence wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// `Content-Type` value, or `""` when the server sent none.
    pub fn content_type(&self) -> &str {
        self.header("content-type").unwrap_or("")
    }
}

/// Performs one GET against `url`, bounded by `cfg.timeout()`.
///
/// `url` must be absolute; libcurl's scheme guessing is never used, so the
/// request target is the same URL `url_model` derives the filename from.
/// Invalid URLs, transport failures (DNS, connect, timeout) and non-2xx final
/// statuses are returned as distinct `FetchError` variants. No retry.
/// Blocks the current thread for the duration of the transfer.
pub fn fetch(url: &str, cfg: &FetchConfig) -> Result<FetchResponse, FetchError> {
    let target = url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(target.as_str())?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTIONS)?;
    easy.timeout(cfg.timeout())?;
    if let Some(ua) = cfg.user_agent.as_deref() {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            status,
            url: url.to_string(),
        });
    }

    tracing::debug!(url, status, bytes = body.len(), "fetched");

    Ok(FetchResponse {
        status,
        headers: parse::parse_headers(&header_lines),
        body,
    })
}
