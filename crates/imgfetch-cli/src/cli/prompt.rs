//! Banner and interactive URL prompt.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

pub fn print_banner() {
    println!("Ubuntu Image Fetcher: 'I am because we are'");
}

/// Prompts on stdout and reads a single line of URLs from stdin.
/// EOF yields an empty line.
pub fn read_url_line() -> Result<String> {
    println!("Enter multiple image URLs separated by spaces:");
    read_line_from(&mut io::stdin().lock(), &mut io::stdout())
}

pub(crate) fn read_line_from(input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
    write!(out, ">> ").context("write prompt")?;
    out.flush().context("flush prompt")?;
    let mut line = String::new();
    input.read_line(&mut line).context("read URLs from stdin")?;
    Ok(line)
}
