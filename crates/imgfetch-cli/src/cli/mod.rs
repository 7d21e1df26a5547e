//! CLI for imgfetch.

mod prompt;

use anyhow::Result;
use clap::Parser;
use imgfetch_core::config;
use imgfetch_core::pipeline::{self, Report};
use std::path::PathBuf;

/// Fetch images from URLs into a local directory, skipping non-images and duplicates.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "Fetch images from URLs, skipping non-images and duplicates", long_about = None)]
pub struct Cli {
    /// Image URLs to fetch. When omitted, one line of URLs is read from stdin.
    pub urls: Vec<String>,

    /// Directory to save images into (overrides `output_dir` from config.toml).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(dir) = cli.output_dir {
            cfg.output_dir = dir;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        prompt::print_banner();
        let urls = if cli.urls.is_empty() {
            pipeline::parse_url_line(&prompt::read_url_line()?)
        } else {
            cli.urls
        };

        pipeline::run_batch(&cfg, &urls, |url, outcome| {
            println!("{}", Report::new(url, outcome));
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests;
