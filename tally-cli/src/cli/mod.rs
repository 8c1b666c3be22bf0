//! # Command Line Interface
//!
//! Defines the CLI surface of the tally tool and the handler that runs the
//! export for a parsed command line.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{Arg, ArgAction, Command, CommandFactory, FromArgMatches, Parser};
use tally_core::output::{ColorMode, print_error};
use tally_core::{TerminalPrompt, resolve_credentials};
use tally_gh::{IssuesError, create_github_client};
use tokio::runtime::Builder;
use tracing::{debug, info};

use crate::config::ExportConfig;
use crate::consts::DEFAULT_FILENAME;
use crate::run::run_export;

/// Top-level CLI command for the tally tool
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Download every issue of a GitHub repository into a CSV file")]
#[command(
  long_about = "Tally downloads all issues, open and closed, of a GitHub repository and\n\
        writes them to a CSV file. Use --toscreen to print them to the terminal as well."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// GitHub repository URL, e.g. https://github.com/octocat/Hello-World
  #[arg(value_name = "REPOSITORY_URL")]
  pub repository: Option<String>,

  /// Your GitHub username; "none" to send no username
  #[arg(short, long)]
  pub username: Option<String>,

  /// Your GitHub password or token; "none" if the repository is public
  #[arg(short, long)]
  pub password: Option<String>,

  /// Name of the output file
  #[arg(short, long, default_value = DEFAULT_FILENAME)]
  pub filename: PathBuf,

  /// Do not add the issue body
  #[arg(short, long)]
  pub nobody: bool,

  /// Also print the issues to the terminal
  #[arg(short, long)]
  pub toscreen: bool,

  /// Separate columns with tabs when printing to the terminal
  #[arg(long, requires = "toscreen")]
  pub tabs: bool,

  /// Do not print progress messages
  #[arg(short, long)]
  pub quiet: bool,

  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             --verbose: Show info level messages\n\
             --verbose --verbose: Show debug level messages\n\
             three or more: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,
}

/// The full command, with `-v` as the version flag.
///
/// clap reserves `-V` for the version; tally keeps the lowercase short flag.
pub fn command() -> Command {
  Cli::command().arg(
    Arg::new("version")
      .short('v')
      .long("version")
      .action(ArgAction::Version)
      .help("Print version"),
  )
}

/// Parse the process arguments, exiting with usage on error
pub fn parse() -> Cli {
  let matches = command().get_matches();
  Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

/// Run tally for a parsed command line.
///
/// Download failures GitHub reported are printed and turn into a failure exit
/// code; anything else (a failed file write included) is returned as an
/// error.
pub fn handle_cli(cli: Cli) -> Result<ExitCode> {
  cli.colors.apply();

  let Some(repository) = cli.repository.as_deref() else {
    println!("{}", command().render_usage());
    return Ok(ExitCode::SUCCESS);
  };

  let config = match ExportConfig::from_cli(&cli, repository) {
    Ok(config) => config,
    Err(err) => {
      print_error(&format!("{err:#}"));
      return Ok(ExitCode::FAILURE);
    }
  };
  debug!("Export configuration: {:?}", config);

  let credentials = resolve_credentials(config.username.as_deref(), config.password.as_deref(), &TerminalPrompt)?;
  let client = create_github_client(&credentials.username, &credentials.password).with_base_url(&config.api_base_url);

  let rt = Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;

  match rt.block_on(run_export(&config, &client)) {
    Ok(summary) => {
      info!("Exported {} issues to {}", summary.issues, summary.output.display());
      Ok(ExitCode::SUCCESS)
    }
    Err(err) => match err.downcast_ref::<IssuesError>() {
      Some(issues_error) => {
        print_error(&issues_error.to_string());
        Ok(ExitCode::FAILURE)
      }
      None => Err(err),
    },
  }
}
