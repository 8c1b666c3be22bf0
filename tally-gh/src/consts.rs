//! Constants for the tally-gh client

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value for the GitHub API client; GitHub rejects requests
/// without one
pub const USER_AGENT: &str = concat!("tally/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Number of issues requested per page (the API maximum)
pub const ISSUES_PER_PAGE: u32 = 100;
