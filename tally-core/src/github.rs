//! GitHub repository URL parsing.
//!
//! The repository is given as the URL a user would copy from the browser, so
//! the parser is lenient about the shape: missing scheme, `www.` host,
//! trailing slash, `.git` suffix and extra path segments (`/issues`,
//! `/tree/main`, ...) are all accepted. SCP-style SSH remotes
//! (`git@github.com:owner/repo.git`) are accepted as well.

use anyhow::{Context, Result, bail};
use url::Url;

const GITHUB_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

/// Parsed GitHub repository reference.
///
/// Represents the owner and repository name extracted from a GitHub URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubRepo {
  /// Repository owner (user or organization)
  pub owner: String,
  /// Repository name
  pub repo: String,
}

impl GitHubRepo {
  /// Parse a GitHub repository URL.
  ///
  /// Returns an error when the input is not a URL on a GitHub host or when
  /// its path does not start with `owner/repo`.
  pub fn parse(input: &str) -> Result<Self> {
    let candidate = normalize_input(input.trim());
    let url = Url::parse(&candidate).with_context(|| format!("Invalid repository URL: {input}"))?;

    let host = url.host_str().unwrap_or_default();
    if !GITHUB_HOSTS.contains(&host) {
      bail!("Not a GitHub repository URL: {input}");
    }

    let mut segments = url
      .path_segments()
      .into_iter()
      .flatten()
      .filter(|segment| !segment.is_empty());

    let (Some(owner), Some(repo)) = (segments.next(), segments.next()) else {
      bail!("Could not extract owner and repo from URL: {input}");
    };

    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if repo.is_empty() {
      bail!("Could not extract owner and repo from URL: {input}");
    }

    Ok(Self {
      owner: owner.to_string(),
      repo: repo.to_string(),
    })
  }

  /// Returns the full repository path as `owner/repo`.
  pub fn full_name(&self) -> String {
    format!("{}/{}", self.owner, self.repo)
  }
}

/// Turn the accepted input shapes into something [`Url::parse`] understands.
fn normalize_input(input: &str) -> String {
  if input.contains("://") {
    input.to_string()
  } else if let Some((user_host, path)) = scp_parts(input) {
    format!("ssh://{user_host}/{path}")
  } else {
    format!("https://{input}")
  }
}

/// Split an SCP-style remote (`user@host:path`) into `user@host` and `path`.
fn scp_parts(input: &str) -> Option<(&str, &str)> {
  let at_pos = input.find('@')?;
  let colon_pos = at_pos + input[at_pos..].find(':')?;
  let path = &input[colon_pos + 1..];
  if path.starts_with("//") {
    return None;
  }
  Some((&input[..colon_pos], path))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(input: &str) -> (String, String) {
    let repo = GitHubRepo::parse(input).unwrap();
    (repo.owner, repo.repo)
  }

  #[test]
  fn parse_https() {
    assert_eq!(parse("https://github.com/octocat/Hello-World"), ("octocat".into(), "Hello-World".into()));
  }

  #[test]
  fn parse_trailing_slash_and_git_suffix() {
    assert_eq!(parse("https://github.com/octocat/Hello-World/"), ("octocat".into(), "Hello-World".into()));
    assert_eq!(parse("https://github.com/octocat/Hello-World.git"), ("octocat".into(), "Hello-World".into()));
    assert_eq!(parse("https://github.com/octocat/Hello-World.git/"), ("octocat".into(), "Hello-World".into()));
  }

  #[test]
  fn parse_ignores_trailing_segments_query_and_fragment() {
    assert_eq!(parse("https://github.com/octocat/Hello-World/issues"), ("octocat".into(), "Hello-World".into()));
    assert_eq!(
      parse("https://github.com/octocat/Hello-World/tree/main?tab=readme#usage"),
      ("octocat".into(), "Hello-World".into())
    );
  }

  #[test]
  fn parse_without_scheme_and_www() {
    assert_eq!(parse("github.com/octocat/Hello-World"), ("octocat".into(), "Hello-World".into()));
    assert_eq!(parse("http://www.github.com/octocat/Hello-World"), ("octocat".into(), "Hello-World".into()));
  }

  #[test]
  fn parse_keeps_dots_in_repo_name() {
    assert_eq!(parse("https://github.com/socketio/socket.io"), ("socketio".into(), "socket.io".into()));
  }

  #[test]
  fn parse_ssh() {
    assert_eq!(parse("git@github.com:octocat/Hello-World.git"), ("octocat".into(), "Hello-World".into()));
    assert_eq!(parse("ssh://git@github.com/octocat/Hello-World"), ("octocat".into(), "Hello-World".into()));
  }

  #[test]
  fn parse_invalid() {
    assert!(GitHubRepo::parse("https://example.com/octocat/Hello-World").is_err());
    assert!(GitHubRepo::parse("https://github.com/only-owner").is_err());
    assert!(GitHubRepo::parse("https://github.com/").is_err());
    assert!(GitHubRepo::parse("https://github.com/octocat/.git").is_err());
    assert!(GitHubRepo::parse("").is_err());
  }

  #[test]
  fn full_name() {
    let repo = GitHubRepo::parse("https://github.com/octocat/Hello-World").unwrap();
    assert_eq!(repo.full_name(), "octocat/Hello-World");
  }
}
