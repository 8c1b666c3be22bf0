//! Terminal rendering of the issue list.
//!
//! Narrower than the CSV: no URL and no assignee, and the column order puts
//! state and milestone before the labels.

use tally_gh::GitHubIssue;

use super::fields;

const SCREEN_COLUMNS: [&str; 8] = [
  "Issue Number",
  "Title",
  "State",
  "Milestone",
  "Labels",
  "Created At",
  "Updated At",
  "Reporter",
];

/// Column separator for the screen rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
  /// `", "`, matching the CSV file
  #[default]
  Comma,
  /// A single tab, for pasting into spreadsheets
  Tab,
}

impl Delimiter {
  pub fn as_str(self) -> &'static str {
    match self {
      Delimiter::Comma => ", ",
      Delimiter::Tab => "\t",
    }
  }
}

/// Header line; `Body` is appended when bodies are shown
pub fn screen_header(no_body: bool, delimiter: Delimiter) -> String {
  let mut columns = SCREEN_COLUMNS.to_vec();
  if !no_body {
    columns.push("Body");
  }
  format!("{}\n", columns.join(delimiter.as_str()))
}

/// Render one issue as a screen line, newline included
pub fn screen_row(issue: &GitHubIssue, no_body: bool, delimiter: Delimiter) -> String {
  let mut row = vec![
    issue.number.to_string(),
    fields::quoted(&issue.title),
    issue.state.clone(),
    fields::milestone(issue).to_string(),
    fields::labels(issue),
    fields::short_date(&issue.created_at),
    fields::short_date(&issue.updated_at),
    fields::reporter(issue).to_string(),
  ];
  if !no_body {
    row.push(fields::body(issue));
  }

  format!("{}\n", row.join(delimiter.as_str()))
}

/// Render the header plus one line per issue
pub fn issues_to_screen(issues: &[GitHubIssue], no_body: bool, delimiter: Delimiter) -> String {
  let mut text = screen_header(no_body, delimiter);
  for issue in issues {
    text.push_str(&screen_row(issue, no_body, delimiter));
  }
  text
}
