//! Constants for the tally CLI

/// File the CSV is written to when `--filename` is not given
pub const DEFAULT_FILENAME: &str = "all_issues.csv";

/// Environment variable overriding the GitHub API root
pub const ENV_GITHUB_API_URL: &str = "TALLY_GITHUB_API_URL";
