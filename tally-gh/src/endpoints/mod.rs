//! # GitHub API Endpoints
//!
//! Endpoint implementations grouped by GitHub API resource type.

pub mod issues;
