//! # Credential Resolution
//!
//! Decides which GitHub username and password the download runs with.
//! Values given on the command line are used as-is, anything missing is asked
//! for on the terminal: the username visibly, the password masked.
//!
//! | username given | password given | prompts |
//! |---|---|---|
//! | yes | yes | none |
//! | no | yes | username |
//! | yes | no | password |
//! | no | no | username, then password |

use anyhow::{Context, Result};
use dialoguer::{Input, Password};
use tracing::debug;

use crate::prompts::tally_theme;

/// Value of `--username`/`--password` that stands for an empty credential
pub const NO_CREDENTIAL: &str = "none";

/// Represents credentials for a service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

/// Source of credentials that were not given up front
pub trait CredentialPrompt {
  /// Ask for the username with visible input
  fn username(&self) -> Result<String>;

  /// Ask for the password with masked input
  fn password(&self) -> Result<String>;
}

/// Prompts on the controlling terminal using dialoguer
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl CredentialPrompt for TerminalPrompt {
  fn username(&self) -> Result<String> {
    Input::<String>::with_theme(&tally_theme())
      .with_prompt("username")
      .allow_empty(true)
      .interact_text()
      .context("Failed to read username")
  }

  fn password(&self) -> Result<String> {
    Password::with_theme(&tally_theme())
      .with_prompt("password")
      .allow_empty_password(true)
      .interact()
      .context("Failed to read password")
  }
}

/// Map the [`NO_CREDENTIAL`] sentinel to an empty string
fn given(value: &str) -> String {
  if value == NO_CREDENTIAL {
    String::new()
  } else {
    value.to_string()
  }
}

/// Resolve the credentials to authenticate with.
///
/// Typed input is taken verbatim, including empty input; the sentinel only
/// applies to values passed in.
pub fn resolve_credentials(
  username: Option<&str>,
  password: Option<&str>,
  prompt: &impl CredentialPrompt,
) -> Result<Credentials> {
  let username = match username {
    Some(username) => given(username),
    None => {
      debug!("No username given, prompting");
      prompt.username()?
    }
  };

  let password = match password {
    Some(password) => given(password),
    None => {
      debug!("No password given, prompting");
      prompt.password()?
    }
  };

  Ok(Credentials { username, password })
}
