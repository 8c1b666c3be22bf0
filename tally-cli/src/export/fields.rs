//! Field derivations shared by the CSV and screen renderings.
//!
//! Escaping is limited to replacing `"` with `'` inside quoted fields.
//! Commas and newlines inside a field are written through unchanged, so a
//! title or body containing them will not read back as a single column.

use chrono::{DateTime, Local, Utc};
use tally_gh::GitHubIssue;

/// Wrap `text` in double quotes after replacing inner double quotes with
/// single quotes
pub(crate) fn quoted(text: &str) -> String {
  format!("\"{}\"", text.replace('"', "'"))
}

/// Label names joined with `,` and wrapped in double quotes
pub(crate) fn labels(issue: &GitHubIssue) -> String {
  format!("\"{}\"", issue.label_names().collect::<Vec<_>>().join(","))
}

/// Short `MM/DD/YYYY` date in the local time zone
pub(crate) fn short_date(timestamp: &DateTime<Utc>) -> String {
  timestamp.with_timezone(&Local).format("%m/%d/%Y").to_string()
}

/// Quoted body; a missing or empty body becomes a single space
pub(crate) fn body(issue: &GitHubIssue) -> String {
  match issue.body.as_deref() {
    Some(body) if !body.is_empty() => quoted(body),
    _ => quoted(" "),
  }
}

pub(crate) fn milestone(issue: &GitHubIssue) -> &str {
  issue.milestone_title().unwrap_or_default()
}

pub(crate) fn reporter(issue: &GitHubIssue) -> &str {
  issue.reporter().unwrap_or_default()
}

pub(crate) fn assignee(issue: &GitHubIssue) -> &str {
  issue.assignee_login().unwrap_or_default()
}
