//! GitHub Issues API endpoint implementations.
//!
//! Listing issues is paginated: every response carries at most
//! [`ISSUES_PER_PAGE`] records and a `Link` header pointing at the next page.
//! Pages are requested strictly one after another and appended in the order
//! GitHub returns them.

use reqwest::header;
use serde_json::Value;
use tracing::{debug, info, instrument, trace, warn};

use crate::client::GitHubClient;
use crate::consts::ISSUES_PER_PAGE;
use crate::error::IssuesError;
use crate::link::{LinkInfo, parse_link_header};
use crate::models::{GitHubErrorBody, GitHubIssue};

/// One decoded page of the issues listing
#[derive(Debug)]
pub struct IssuePage {
  pub issues: Vec<GitHubIssue>,
  /// Pagination neighbours, `None` when this is the last page
  pub links: Option<LinkInfo>,
}

/// Reported after each page has been appended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProgress {
  /// 1-based number of the page just fetched
  pub page: usize,
  /// Page number of the `last` relation, when GitHub sent one
  pub last_page: Option<u32>,
  /// Issues accumulated so far, this page included
  pub fetched: usize,
  /// Whether pagination stops after this page
  pub is_last: bool,
}

impl GitHubClient {
  /// URL of the first page listing all issues, open and closed
  pub fn issues_start_url(&self, owner: &str, repo: &str) -> String {
    format!(
      "{}/repos/{}/{}/issues?state=all&per_page={}&page=1",
      self.base_url, owner, repo, ISSUES_PER_PAGE
    )
  }

  /// Fetch and decode a single page of the issues listing.
  ///
  /// # Errors
  ///
  /// Returns [`IssuesError::Transport`] if the request fails, a classified
  /// error if GitHub answered with an error object or an empty list, and
  /// [`IssuesError::Decode`] if the body is not a list of issues.
  #[instrument(skip(self), level = "debug")]
  pub async fn fetch_issue_page(&self, url: &str) -> Result<IssuePage, IssuesError> {
    info!("Requesting {}", url);

    let response = self.get(url).send().await?;

    let status = response.status();
    debug!("GitHub API response status: {}", status);

    let link = response
      .headers()
      .get(header::LINK)
      .and_then(|value| value.to_str().ok())
      .map(str::to_owned);
    trace!("Link header: {:?}", link);

    let body = response.text().await?;
    let issues = decode_issue_page(&body)?;

    Ok(IssuePage {
      issues,
      links: parse_link_header(link.as_deref()),
    })
  }

  /// Follow the `next` chain starting at `start_url` and collect every issue.
  ///
  /// `on_page` is called after each page has been appended. There is no
  /// upper bound on the number of pages: a server that keeps advertising a
  /// `next` link keeps this loop running.
  ///
  /// # Errors
  ///
  /// Stops at the first failing page and returns its error; issues gathered
  /// from earlier pages are dropped.
  pub async fn fetch_issue_pages<F>(&self, start_url: &str, mut on_page: F) -> Result<Vec<GitHubIssue>, IssuesError>
  where
    F: FnMut(&PageProgress),
  {
    let mut issues = Vec::new();
    let mut url = start_url.to_string();
    let mut page = 0;

    loop {
      page += 1;
      let IssuePage { issues: batch, links } = self.fetch_issue_page(&url).await.inspect_err(|err| {
        warn!("Page {} failed: {}", page, err);
      })?;

      debug!("Page {} returned {} issues", page, batch.len());
      issues.extend(batch);

      let next = links.as_ref().and_then(|links| links.next.clone());
      let progress = PageProgress {
        page,
        last_page: links.as_ref().and_then(|links| links.last.as_ref()).and_then(|last| last.page),
        fetched: issues.len(),
        is_last: next.is_none(),
      };
      on_page(&progress);

      match next {
        Some(next) => url = next.url,
        None => break,
      }
    }

    info!("Fetched {} issues in {} pages", issues.len(), page);
    Ok(issues)
  }

  /// Fetch every issue of `owner/repo`, reporting each completed page
  pub async fn fetch_all_issues<F>(&self, owner: &str, repo: &str, on_page: F) -> Result<Vec<GitHubIssue>, IssuesError>
  where
    F: FnMut(&PageProgress),
  {
    let start_url = self.issues_start_url(owner, repo);
    self.fetch_issue_pages(&start_url, on_page).await
  }
}

/// Decode a listing body.
///
/// Only a non-empty array counts as data; an error object is classified by
/// its `message`, anything else means there is nothing to download.
fn decode_issue_page(body: &str) -> Result<Vec<GitHubIssue>, IssuesError> {
  let value: Value = serde_json::from_str(body)?;

  match value {
    Value::Array(items) if !items.is_empty() => Ok(serde_json::from_value(Value::Array(items))?),
    Value::Object(_) => {
      let error_body: Option<GitHubErrorBody> = serde_json::from_value(value).ok();
      let message = error_body.and_then(|body| body.message);
      warn!("GitHub API error: {:?}", message);
      Err(IssuesError::from_message(message.as_deref()))
    }
    _ => Err(IssuesError::EmptyRepository),
  }
}
