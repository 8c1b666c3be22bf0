//! # GitHub API Client
//!
//! Provides GitHub REST API integration for listing repository issues,
//! following the `Link` header pagination chain and classifying the error
//! bodies GitHub returns instead of an issue list.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod link;
pub mod models;

// Re-export the client
pub use client::{GitHubClient, create_github_client};
// Re-export endpoint types
pub use endpoints::issues::{IssuePage, PageProgress};
pub use error::IssuesError;
pub use link::{LinkEntry, LinkInfo, PageLink, parse_link_entry, parse_link_header};
// Re-export models
pub use models::{GitHubAuth, GitHubIssue, GitHubLabel, GitHubMilestone, GitHubUser};
