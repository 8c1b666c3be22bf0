//! # Link Header Parsing
//!
//! GitHub advertises pagination neighbours in the `Link` response header:
//!
//! ```text
//! <https://api.github.com/repositories/1/issues?page=2>; rel="next", <https://api.github.com/repositories/1/issues?page=5>; rel="last"
//! ```

use std::sync::LazyLock;

use regex::Regex;

static PAGE_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[?&]page=(\d+)").expect("Failed to compile page parameter regex"));

static REL_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r#"rel="([^"]+)""#).expect("Failed to compile rel parameter regex"));

/// A pagination neighbour: its URL and the page number encoded in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
  pub url: String,
  pub page: Option<u32>,
}

/// The four pagination relations GitHub may send
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkInfo {
  pub first: Option<PageLink>,
  pub prev: Option<PageLink>,
  pub next: Option<PageLink>,
  pub last: Option<PageLink>,
}

/// Pieces extracted from a single `<url>; rel="name"` entry.
///
/// Each piece is `None` when the entry does not contain it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkEntry {
  pub url: Option<String>,
  pub rel: Option<String>,
  pub page: Option<u32>,
}

/// Extract url, relation and page number from one Link header entry
pub fn parse_link_entry(entry: &str) -> LinkEntry {
  let url = match (entry.find('<'), entry.find('>')) {
    (Some(start), Some(end)) if start < end => Some(entry[start + 1..end].to_string()),
    _ => None,
  };

  let rel = REL_REGEX
    .captures(entry)
    .and_then(|captures| captures.get(1))
    .map(|rel| rel.as_str().to_string());

  let page = url
    .as_deref()
    .and_then(|url| PAGE_REGEX.captures(url))
    .and_then(|captures| captures.get(1))
    .and_then(|page| page.as_str().parse().ok());

  LinkEntry { url, rel, page }
}

/// Parse a raw `Link` header value.
///
/// Returns `None` when there are no further pages: the header is absent or
/// it carries no `next` relation. Unknown relations and entries missing
/// either the `<url>` or the `rel` part are ignored.
pub fn parse_link_header(raw: Option<&str>) -> Option<LinkInfo> {
  let raw = raw?;
  if !raw.contains("next") {
    return None;
  }

  let mut info = LinkInfo::default();
  for entry in raw.split(',') {
    let LinkEntry { url, rel, page } = parse_link_entry(entry);
    let (Some(url), Some(rel)) = (url, rel) else {
      continue;
    };

    let link = Some(PageLink { url, page });
    match rel.as_str() {
      "first" => info.first = link,
      "prev" => info.prev = link,
      "next" => info.next = link,
      "last" => info.last = link,
      _ => {}
    }
  }

  info.next.is_some().then_some(info)
}

#[cfg(test)]
mod tests {
  use super::*;

  const NEXT_AND_LAST: &str = r#"<https://api.github.com/repos/octocat/Hello-World/issues?state=all&per_page=100&page=2>; rel="next", <https://api.github.com/repos/octocat/Hello-World/issues?state=all&per_page=100&page=5>; rel="last""#;

  #[test]
  fn test_next_and_last() {
    let info = parse_link_header(Some(NEXT_AND_LAST)).unwrap();

    assert_eq!(
      info.next,
      Some(PageLink {
        url: "https://api.github.com/repos/octocat/Hello-World/issues?state=all&per_page=100&page=2".to_string(),
        page: Some(2),
      })
    );
    assert_eq!(
      info.last,
      Some(PageLink {
        url: "https://api.github.com/repos/octocat/Hello-World/issues?state=all&per_page=100&page=5".to_string(),
        page: Some(5),
      })
    );
    assert_eq!(info.first, None);
    assert_eq!(info.prev, None);
  }

  #[test]
  fn test_all_four_relations() {
    let raw = r#"<https://api.github.com/x?page=3>; rel="next", <https://api.github.com/x?page=9>; rel="last", <https://api.github.com/x?page=1>; rel="first", <https://api.github.com/x?page=1>; rel="prev""#;
    let info = parse_link_header(Some(raw)).unwrap();

    assert_eq!(info.next.unwrap().page, Some(3));
    assert_eq!(info.last.unwrap().page, Some(9));
    assert_eq!(info.first.unwrap().page, Some(1));
    assert_eq!(info.prev.unwrap().url, "https://api.github.com/x?page=1");
  }

  #[test]
  fn test_missing_header_means_no_further_pages() {
    assert_eq!(parse_link_header(None), None);
  }

  #[test]
  fn test_last_page_has_no_next() {
    let raw = r#"<https://api.github.com/x?page=1>; rel="first", <https://api.github.com/x?page=4>; rel="prev""#;
    assert_eq!(parse_link_header(Some(raw)), None);
  }

  #[test]
  fn test_next_token_without_next_relation() {
    let raw = r#"<https://api.github.com/next?page=1>; rel="first""#;
    assert_eq!(parse_link_header(Some(raw)), None);
  }

  #[test]
  fn test_per_page_is_not_mistaken_for_page() {
    let raw = r#"<https://api.github.com/x?per_page=100>; rel="next""#;
    let info = parse_link_header(Some(raw)).unwrap();
    assert_eq!(info.next.unwrap().page, None);
  }

  #[test]
  fn test_unknown_relations_are_ignored() {
    let raw = r#"<https://api.github.com/x?page=2>; rel="next", <https://api.github.com/x?page=7>; rel="alternate""#;
    let info = parse_link_header(Some(raw)).unwrap();
    assert_eq!(info.next.unwrap().page, Some(2));
    assert_eq!(info.last, None);
  }

  #[test]
  fn test_malformed_entries_are_tolerated() {
    let entry = parse_link_entry(r#" https://api.github.com/x?page=2; rel="next""#);
    assert_eq!(entry.url, None);
    assert_eq!(entry.rel.as_deref(), Some("next"));
    assert_eq!(entry.page, None);

    let entry = parse_link_entry("<https://api.github.com/x?page=2>");
    assert_eq!(entry.url.as_deref(), Some("https://api.github.com/x?page=2"));
    assert_eq!(entry.rel, None);
    assert_eq!(entry.page, Some(2));

    // Neither entry yields a usable `next` link
    let raw = r#"https://api.github.com/x?page=2; rel="next", <https://api.github.com/x?page=2>"#;
    assert_eq!(parse_link_header(Some(raw)), None);
  }

  #[test]
  fn test_next_url_is_text_between_first_angle_brackets() {
    for (raw, expected_url, expected_page) in [
      (r#"<a?page=12>; rel="next""#, "a?page=12", Some(12)),
      (r#"<https://h/p?q=1&page=40&x=y>; rel="next""#, "https://h/p?q=1&page=40&x=y", Some(40)),
      (r#"<https://h/p?cursor=abc>; rel="next""#, "https://h/p?cursor=abc", None),
    ] {
      let next = parse_link_header(Some(raw)).unwrap().next.unwrap();
      assert_eq!(next.url, expected_url);
      assert_eq!(next.page, expected_page);
    }
  }
}
