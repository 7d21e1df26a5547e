//! Fetch error type distinguishing transport failures from HTTP status failures.

use std::fmt;

/// Error returned by a single fetch.
#[derive(Debug)]
pub enum FetchError {
    /// The string is not an absolute URL (e.g. missing scheme); nothing was sent.
    InvalidUrl { url: String, source: url::ParseError },
    /// Curl reported an error (timeout, connection, DNS, malformed URL, etc.).
    Transport(curl::Error),
    /// Final HTTP response had a non-2xx status.
    Http { status: u32, url: String },
}

impl FetchError {
    /// True if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Transport(e) if e.is_operation_timedout())
    }

    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            FetchError::InvalidUrl { .. } | FetchError::Transport(_) => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Transport(e)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl { url, source } => {
                write!(f, "invalid URL '{}': {}", url, source)
            }
            FetchError::Transport(e) => write!(f, "{}", e),
            FetchError::Http { status, url } => write!(f, "HTTP {} for url: {}", status, url),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::InvalidUrl { source, .. } => Some(source),
            FetchError::Transport(e) => Some(e),
            FetchError::Http { .. } => None,
        }
    }
}
