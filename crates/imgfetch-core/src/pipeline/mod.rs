//! Fetch → validate → dedupe → store, one URL at a time.
//!
//! Each URL is processed to completion before the next starts. Every failure
//! is captured in that URL's `Outcome`; nothing aborts the batch once the
//! output directory exists.

mod outcome;
mod report;

pub use outcome::{BatchSummary, Outcome, PipelineError};
pub use report::Report;

use crate::config::FetchConfig;
use crate::fetch::{self, FetchResponse};
use crate::{dedupe, storage, url_model, validate};
use anyhow::Result;

/// Splits one input line into URLs on any whitespace. Blank input yields none.
pub fn parse_url_line(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Fetches `url` and stores it if it is a new or changed image.
pub fn process_url(url: &str, cfg: &FetchConfig) -> Outcome {
    match fetch::fetch(url, cfg) {
        Ok(response) => store_response(url, &response, cfg),
        Err(e) => {
            tracing::warn!(url, timeout = e.is_timeout(), error = %e, "fetch failed");
            Outcome::Failed(e.into())
        }
    }
}

/// Validate, dedupe and store an already-fetched response.
///
/// Writes only if the content type is an image and no identical file exists at
/// the derived path. A differing file at that path is overwritten.
pub fn store_response(url: &str, response: &FetchResponse, cfg: &FetchConfig) -> Outcome {
    if let Err(content_type) = validate::check_image(response) {
        tracing::info!(url, content_type = %content_type, "not an image, skipping");
        return Outcome::NotImage { content_type };
    }

    let filename = url_model::derive_filename(url, &cfg.fallback_extension);
    let path = cfg.output_dir.join(&filename);

    match dedupe::is_duplicate(&path, &response.body) {
        Ok(true) => {
            tracing::info!(url, filename = %filename, "duplicate, skipping");
            return Outcome::Duplicate { filename };
        }
        Ok(false) => {}
        Err(e) => {
            tracing::warn!(url, path = %path.display(), "dedupe check failed: {:#}", e);
            return Outcome::Failed(PipelineError::Storage(e));
        }
    }

    if let Err(e) = storage::write_payload(&path, &response.body) {
        tracing::warn!(url, path = %path.display(), "write failed: {:#}", e);
        return Outcome::Failed(PipelineError::Storage(e));
    }

    tracing::info!(url, filename = %filename, bytes = response.body.len(), "saved");
    Outcome::Saved { filename }
}

/// Runs the pipeline for every URL in order, calling `on_outcome` after each.
///
/// The output directory is created first; failing to create it is the only
/// error returned. Per-URL failures are reported through `on_outcome`.
pub fn run_batch<I, S, F>(cfg: &FetchConfig, urls: I, mut on_outcome: F) -> Result<BatchSummary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str, &Outcome),
{
    storage::ensure_dir(&cfg.output_dir)?;

    let mut summary = BatchSummary::default();
    for url in urls {
        let url = url.as_ref();
        let outcome = process_url(url, cfg);
        summary.record(&outcome);
        on_outcome(url, &outcome);
    }

    tracing::info!(
        total = summary.total(),
        saved = summary.saved,
        not_image = summary.not_image,
        duplicate = summary.duplicate,
        failed = summary.failed,
        "batch finished"
    );
    Ok(summary)
}
