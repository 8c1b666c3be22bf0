//! # Tally Core Library
//!
//! Shared building blocks for the tally command-line tool: repository URL
//! parsing, credential resolution, prompt styling and colored console output.

pub mod creds;
pub mod github;
pub mod output;
pub mod prompts;

pub use creds::{CredentialPrompt, Credentials, NO_CREDENTIAL, TerminalPrompt, resolve_credentials};
pub use github::GitHubRepo;
pub use output::{ColorMode, print_error, print_info, print_success};
