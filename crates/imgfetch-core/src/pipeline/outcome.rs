//! Per-URL outcome and error types, plus batch counters.

use crate::fetch::FetchError;

/// Why a URL failed. Never fatal to the batch.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Transport failure or non-2xx status.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Reading the existing file or writing the new one failed.
    #[error("{0:#}")]
    Storage(anyhow::Error),
}

/// Result of running the pipeline for one URL.
#[derive(Debug)]
pub enum Outcome {
    /// Payload written (new file or overwrite of differing content).
    Saved { filename: String },
    /// Declared content type does not start with `image/`; nothing written.
    NotImage { content_type: String },
    /// Existing file has identical content; nothing written.
    Duplicate { filename: String },
    Failed(PipelineError),
}

impl Outcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Counts of outcomes over one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub saved: usize,
    pub not_image: usize,
    pub duplicate: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Saved { .. } => self.saved += 1,
            Outcome::NotImage { .. } => self.not_image += 1,
            Outcome::Duplicate { .. } => self.duplicate += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.saved + self.not_image + self.duplicate + self.failed
    }
}
