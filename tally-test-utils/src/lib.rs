//! Test utilities shared across the tally workspace
//!
//! This crate provides common testing infrastructure including:
//! - GitHub issue payload fixtures ([`issue_json`], [`issues_json`])
//! - `Link` header construction ([`link_header`])
//! - Isolated output directories ([`OutputDirGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod fixtures;
pub mod output;

// Re-export commonly used items
pub use fixtures::{issue_json, issue_json_with, issues_json, link_header};
pub use output::OutputDirGuard;
