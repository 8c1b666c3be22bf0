use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Represents GitHub authentication credentials
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GitHubAuth {
  pub username: String,
  pub password: String,
}

/// Represents a GitHub user as embedded in an issue
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
  pub login: String,
}

/// Represents a label attached to an issue
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubLabel {
  pub name: String,
}

/// Represents the milestone an issue is scheduled for
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubMilestone {
  pub title: String,
}

/// Represents a GitHub issue as returned by the issues listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubIssue {
  pub number: u64,
  pub title: String,
  pub html_url: String,
  #[serde(default)]
  pub labels: Vec<GitHubLabel>,
  pub state: String,
  pub milestone: Option<GitHubMilestone>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub user: Option<GitHubUser>,
  pub assignee: Option<GitHubUser>,
  pub body: Option<String>,
}

impl GitHubIssue {
  /// Login of the user who opened the issue
  pub fn reporter(&self) -> Option<&str> {
    self.user.as_ref().map(|user| user.login.as_str())
  }

  /// Login of the assigned user
  pub fn assignee_login(&self) -> Option<&str> {
    self.assignee.as_ref().map(|user| user.login.as_str())
  }

  /// Title of the milestone
  pub fn milestone_title(&self) -> Option<&str> {
    self.milestone.as_ref().map(|milestone| milestone.title.as_str())
  }

  /// Label names in the order GitHub returned them
  pub fn label_names(&self) -> impl Iterator<Item = &str> {
    self.labels.iter().map(|label| label.name.as_str())
  }
}

/// Error body GitHub sends instead of the requested resource
#[derive(Debug, Deserialize)]
pub(crate) struct GitHubErrorBody {
  pub message: Option<String>,
}
