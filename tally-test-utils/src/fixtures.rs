//! GitHub API payload fixtures
//!
//! Issue objects carry every field the exporter reads plus a few it ignores,
//! so tests exercise decoding against realistic payloads.

use serde_json::{Value, json};

/// A minimal but complete issue object numbered `number`.
///
/// Timestamps sit at noon UTC so the exported local date is the same in
/// every time zone between UTC-11 and UTC+11.
pub fn issue_json(number: u64) -> Value {
  json!({
    "id": 1_000_000 + number,
    "number": number,
    "title": format!("Issue {number}"),
    "html_url": format!("https://github.com/octocat/Hello-World/issues/{number}"),
    "state": "open",
    "labels": [],
    "milestone": null,
    "user": { "login": "octocat", "id": 1 },
    "assignee": null,
    "comments": 0,
    "created_at": "2011-04-22T12:00:00Z",
    "updated_at": "2011-04-23T12:00:00Z",
    "body": format!("Body of issue {number}")
  })
}

/// [`issue_json`] with the top-level fields of `overrides` replacing the
/// defaults
pub fn issue_json_with(number: u64, overrides: Value) -> Value {
  let mut issue = issue_json(number);
  if let (Some(target), Value::Object(fields)) = (issue.as_object_mut(), overrides) {
    for (key, value) in fields {
      target.insert(key, value);
    }
  }
  issue
}

/// A JSON array of [`issue_json`] objects in the given order
pub fn issues_json(numbers: &[u64]) -> Value {
  Value::Array(numbers.iter().copied().map(issue_json).collect())
}

/// Build a `Link` header value from `(url, rel)` pairs
pub fn link_header(links: &[(&str, &str)]) -> String {
  links
    .iter()
    .map(|(url, rel)| format!("<{url}>; rel=\"{rel}\""))
    .collect::<Vec<_>>()
    .join(", ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_issue_json_with_overrides() {
    let issue = issue_json_with(3, json!({ "state": "closed", "body": null }));
    assert_eq!(issue["number"], 3);
    assert_eq!(issue["state"], "closed");
    assert!(issue["body"].is_null());
    assert_eq!(issue["title"], "Issue 3");
  }

  #[test]
  fn test_link_header() {
    let header = link_header(&[("https://a/?page=2", "next"), ("https://a/?page=3", "last")]);
    assert_eq!(header, r#"<https://a/?page=2>; rel="next", <https://a/?page=3>; rel="last""#);
  }
}
