//! Human-readable status line for one URL.

use super::outcome::{Outcome, PipelineError};
use std::fmt;

/// Display adapter pairing a URL with its outcome.
pub struct Report<'a> {
    pub url: &'a str,
    pub outcome: &'a Outcome,
}

impl<'a> Report<'a> {
    pub fn new(url: &'a str, outcome: &'a Outcome) -> Self {
        Self { url, outcome }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Saved { filename } => write!(f, "Saved: {}", filename),
            Outcome::NotImage { content_type } => write!(
                f,
                "Skipping {} - Not an image (Content-Type: {})",
                self.url, content_type
            ),
            Outcome::Duplicate { filename } => {
                write!(f, "Duplicate found, skipping: {}", filename)
            }
            Outcome::Failed(PipelineError::Fetch(e)) => {
                write!(f, "Failed to fetch {} - {}", self.url, e)
            }
            Outcome::Failed(PipelineError::Storage(e)) => {
                write!(f, "Failed to save {} - {:#}", self.url, e)
            }
        }
    }
}
