//! CSV rendering of the issue list.

use tally_gh::GitHubIssue;

use super::fields;

/// Header line written at the top of every CSV file
pub const CSV_HEADER: &str =
  "Issue Number, Title, Github URL, Labels, State, Milestone, Created At, Updated At, Reporter, Assignee, Body\n";

/// Render one issue as a CSV line, newline included.
///
/// With `no_body` the Body column is left empty and the line ends in `", "`.
pub fn csv_row(issue: &GitHubIssue, no_body: bool) -> String {
  let body = if no_body { String::new() } else { fields::body(issue) };

  let row = [
    issue.number.to_string(),
    fields::quoted(&issue.title),
    issue.html_url.clone(),
    fields::labels(issue),
    issue.state.clone(),
    fields::milestone(issue).to_string(),
    fields::short_date(&issue.created_at),
    fields::short_date(&issue.updated_at),
    fields::reporter(issue).to_string(),
    fields::assignee(issue).to_string(),
    body,
  ];

  format!("{}\n", row.join(", "))
}

/// Render the header plus one line per issue, in the given order
pub fn issues_to_csv(issues: &[GitHubIssue], no_body: bool) -> String {
  let mut csv = String::from(CSV_HEADER);
  for issue in issues {
    csv.push_str(&csv_row(issue, no_body));
  }
  csv
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use tally_test_utils::{issue_json, issue_json_with};

  use super::*;

  fn issue(value: serde_json::Value) -> GitHubIssue {
    serde_json::from_value(value).unwrap()
  }

  fn full_issue() -> GitHubIssue {
    issue(issue_json_with(
      1347,
      json!({
        "title": "Crash when saving \"draft\" files",
        "labels": [{ "name": "bug" }, { "name": "help wanted" }],
        "state": "closed",
        "milestone": { "title": "v1.0" },
        "assignee": { "login": "hubot" },
        "body": "Steps:\nclick \"save\""
      }),
    ))
  }

  #[test]
  fn test_row_with_body() {
    assert_eq!(
      csv_row(&full_issue(), false),
      "1347, \"Crash when saving 'draft' files\", https://github.com/octocat/Hello-World/issues/1347, \
       \"bug,help wanted\", closed, v1.0, 04/22/2011, 04/23/2011, octocat, hubot, \"Steps:\nclick 'save'\"\n"
    );
  }

  #[test]
  fn test_row_without_body_ends_with_empty_field() {
    let row = csv_row(&full_issue(), true);
    assert!(row.ends_with(", hubot, \n"));
    assert!(!row.contains("Steps:"));
  }

  #[test]
  fn test_missing_optional_fields_are_empty() {
    let row = csv_row(
      &issue(issue_json_with(
        5,
        json!({ "user": null, "assignee": null, "milestone": null, "body": null }),
      )),
      false,
    );
    assert_eq!(
      row,
      "5, \"Issue 5\", https://github.com/octocat/Hello-World/issues/5, \"\", open, , 04/22/2011, 04/23/2011, , , \" \"\n"
    );
  }

  #[test]
  fn test_empty_body_becomes_single_space() {
    let row = csv_row(&issue(issue_json_with(6, json!({ "body": "" }))), false);
    assert!(row.ends_with(", \" \"\n"));
  }

  #[test]
  fn test_header_and_rows() {
    let issues = vec![issue(issue_json(2)), issue(issue_json(1))];
    let csv = issues_to_csv(&issues, false);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(format!("{}\n", lines[0]), CSV_HEADER);
    assert!(lines[1].starts_with("2, "));
    assert!(lines[2].starts_with("1, "));
  }

  #[test]
  fn test_number_state_and_url_read_back() {
    let issues = vec![
      issue(issue_json(10)),
      issue(issue_json_with(11, json!({ "state": "closed", "labels": [{ "name": "ui" }] }))),
    ];
    let csv = issues_to_csv(&issues, true);

    for (line, expected) in csv.lines().skip(1).zip(&issues) {
      let columns: Vec<&str> = line.split(", ").collect();
      assert_eq!(columns[0], expected.number.to_string());
      assert_eq!(columns[2], expected.html_url);
      assert_eq!(columns[4], expected.state);
    }
  }

  #[test]
  fn test_empty_list_is_header_only() {
    assert_eq!(issues_to_csv(&[], false), CSV_HEADER);
  }
}
