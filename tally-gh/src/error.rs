//! Error taxonomy for the issues listing.
//!
//! GitHub answers a failed listing with a JSON object carrying a `message`
//! instead of an array. The message is what decides the category, the HTTP
//! status is only logged.

use thiserror::Error;

const MESSAGE_NOT_FOUND: &str = "Not Found";
const MESSAGE_BAD_CREDENTIALS: &str = "Bad credentials";
const MESSAGE_TWO_FACTOR: &str = "Must specify two-factor authentication OTP code.";

/// Errors that stop the issue download
#[derive(Debug, Error)]
pub enum IssuesError {
  #[error("We didn't find any repository on this URL, please check it")]
  NotFound,
  #[error("Your username or password is invalid, please check it")]
  BadCredentials,
  #[error("Your account requires two-factor authentication, which is currently not supported")]
  TwoFactorRequired,
  #[error("Repository has 0 issues. Nothing to download")]
  EmptyRepository,
  #[error("There has been an error requesting data from GitHub: {0}")]
  Transport(#[from] reqwest::Error),
  #[error("Failed to decode the GitHub response: {0}")]
  Decode(#[from] serde_json::Error),
}

impl IssuesError {
  /// Map the `message` of a GitHub error body to a category.
  ///
  /// Anything unrecognised (including a missing message) is reported as an
  /// empty repository.
  pub fn from_message(message: Option<&str>) -> Self {
    match message {
      Some(MESSAGE_NOT_FOUND) => Self::NotFound,
      Some(MESSAGE_BAD_CREDENTIALS) => Self::BadCredentials,
      Some(MESSAGE_TWO_FACTOR) => Self::TwoFactorRequired,
      _ => Self::EmptyRepository,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_message_known_categories() {
    assert!(matches!(IssuesError::from_message(Some("Not Found")), IssuesError::NotFound));
    assert!(matches!(
      IssuesError::from_message(Some("Bad credentials")),
      IssuesError::BadCredentials
    ));
    assert!(matches!(
      IssuesError::from_message(Some("Must specify two-factor authentication OTP code.")),
      IssuesError::TwoFactorRequired
    ));
  }

  #[test]
  fn test_from_message_defaults_to_empty_repository() {
    assert!(matches!(
      IssuesError::from_message(Some("API rate limit exceeded")),
      IssuesError::EmptyRepository
    ));
    assert!(matches!(IssuesError::from_message(None), IssuesError::EmptyRepository));
  }

  #[test]
  fn test_messages_are_user_facing() {
    assert!(IssuesError::NotFound.to_string().contains("didn't find any repository"));
    assert!(IssuesError::EmptyRepository.to_string().contains("0 issues"));
  }
}
