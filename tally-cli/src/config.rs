//! # Export Configuration
//!
//! Everything one export run needs, gathered from the command line and the
//! environment into a single value that is passed down the pipeline.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use tally_core::GitHubRepo;
use tally_gh::consts::API_BASE_URL;

use crate::cli::Cli;
use crate::consts::ENV_GITHUB_API_URL;
use crate::export::Delimiter;

/// Settings for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
  /// Repository whose issues are exported
  pub repository: GitHubRepo,
  /// Username given on the command line, prompted for when `None`
  pub username: Option<String>,
  /// Password given on the command line, prompted for when `None`
  pub password: Option<String>,
  /// CSV file to write
  pub output: PathBuf,
  /// Leave the Body column empty
  pub no_body: bool,
  /// Print the issues to the terminal before writing the file
  pub to_screen: bool,
  /// Column separator for the terminal output
  pub delimiter: Delimiter,
  /// Suppress progress messages
  pub quiet: bool,
  /// GitHub API root
  pub api_base_url: String,
}

impl ExportConfig {
  /// Build the configuration for exporting `repository_url`.
  ///
  /// Fails when the URL does not point at a GitHub repository.
  pub fn from_cli(cli: &Cli, repository_url: &str) -> Result<Self> {
    Ok(Self {
      repository: GitHubRepo::parse(repository_url)?,
      username: cli.username.clone(),
      password: cli.password.clone(),
      output: cli.filename.clone(),
      no_body: cli.nobody,
      to_screen: cli.toscreen,
      delimiter: if cli.tabs { Delimiter::Tab } else { Delimiter::Comma },
      quiet: cli.quiet,
      api_base_url: api_base_url(env::var(ENV_GITHUB_API_URL).ok()),
    })
  }
}

/// The API root from an override value, falling back to the public API
pub fn api_base_url(override_url: Option<String>) -> String {
  override_url
    .map(|url| url.trim().to_string())
    .filter(|url| !url.is_empty())
    .unwrap_or_else(|| API_BASE_URL.to_string())
}
