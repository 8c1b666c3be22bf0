//! # Tally CLI Entry Point
//!
//! The main entry point for the tally command-line tool, which exports the
//! issues of a GitHub repository to CSV.

use std::process::ExitCode;

use anyhow::Result;
use tally_cli::cli::{self, handle_cli};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<ExitCode> {
  let cmd = cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // --verbose: info, warnings, and errors
    2 => tracing::Level::DEBUG, // twice: debug and everything above
    _ => tracing::Level::TRACE, // three or more: everything
  };

  // Logs go to stderr so they never mix with --toscreen output
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  handle_cli(cmd)
}
