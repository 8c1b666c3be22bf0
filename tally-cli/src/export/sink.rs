//! Where rendered text ends up: the CSV file and the terminal.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Write the CSV text to `path`, replacing any existing file
pub fn write_csv(path: &Path, csv: &str) -> Result<()> {
  debug!("Writing {} bytes to {}", csv.len(), path.display());
  fs::write(path, csv).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write the screen rendering to `writer`
pub fn write_screen<W: Write>(writer: &mut W, text: &str) -> Result<()> {
  writer.write_all(text.as_bytes()).context("Failed to print issues")?;
  writer.flush().context("Failed to flush output")
}

/// Print the screen rendering to standard output
pub fn print_screen(text: &str) -> Result<()> {
  write_screen(&mut io::stdout().lock(), text)
}
