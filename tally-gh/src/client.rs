//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling
//! authentication and the headers every GitHub REST request needs.

use reqwest::{Client, RequestBuilder, header};

use crate::consts::{ACCEPT, API_BASE_URL, USER_AGENT};
use crate::models::GitHubAuth;

/// Represents a GitHub API client
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: GitHubAuth,
}

impl GitHubClient {
  /// Create a new GitHub client talking to the public API
  pub fn new(auth: GitHubAuth) -> Self {
    Self {
      client: Client::new(),
      base_url: API_BASE_URL.to_string(),
      auth,
    }
  }

  /// Point the client at a different API root, e.g. a GitHub Enterprise
  /// instance. Trailing slashes are dropped.
  pub fn with_base_url(mut self, base_url: &str) -> Self {
    self.base_url = base_url.trim_end_matches('/').to_string();
    self
  }

  /// The API root requests are built against
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Whether requests carry an `Authorization` header.
  ///
  /// An empty password means anonymous access.
  pub fn is_authenticated(&self) -> bool {
    !self.auth.password.is_empty()
  }

  /// Build a GET request with the standard GitHub headers and, when
  /// credentials are present, basic authentication.
  pub(crate) fn get(&self, url: &str) -> RequestBuilder {
    let request = self
      .client
      .get(url)
      .header(header::ACCEPT, ACCEPT)
      .header(header::USER_AGENT, USER_AGENT);

    if self.is_authenticated() {
      request.basic_auth(&self.auth.username, Some(&self.auth.password))
    } else {
      request
    }
  }
}

/// Create a GitHub client from credentials
pub fn create_github_client(username: &str, password: &str) -> GitHubClient {
  let auth = GitHubAuth {
    username: username.to_string(),
    password: password.to_string(),
  };

  GitHubClient::new(auth)
}
