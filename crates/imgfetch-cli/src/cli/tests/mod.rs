//! CLI parse tests.

use super::Cli;
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_no_args_prompts() {
    let cli = parse(&["imgfetch"]);
    assert!(cli.urls.is_empty());
    assert!(cli.output_dir.is_none());
}

#[test]
fn cli_parse_positional_urls() {
    let cli = parse(&["imgfetch", "http://a/x.jpg", "http://b/"]);
    assert_eq!(cli.urls, vec!["http://a/x.jpg", "http://b/"]);
}

#[test]
fn cli_parse_output_dir() {
    let cli = parse(&["imgfetch", "--output-dir", "/tmp/pics", "http://a/x.jpg"]);
    assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/pics")));
    assert_eq!(cli.urls, vec!["http://a/x.jpg"]);
}

#[test]
fn cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["imgfetch", "--retries", "3"]).is_err());
}
