//! # Export Pipeline
//!
//! Download, render and write, one step after the other. Nothing is written
//! unless every page was downloaded.

use std::path::PathBuf;

use anyhow::Result;
use tally_core::output::{format_count, format_path, format_repo_name, print_info, print_success};
use tally_gh::{GitHubClient, PageProgress};
use tracing::{debug, info};

use crate::config::ExportConfig;
use crate::export::{issues_to_csv, issues_to_screen, print_screen, write_csv};

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
  /// Number of issues written
  pub issues: usize,
  /// File the CSV was written to
  pub output: PathBuf,
}

/// Download every issue of the configured repository and export it.
///
/// # Errors
///
/// Download failures are returned as [`tally_gh::IssuesError`] inside the
/// `anyhow::Error`, in which case no file has been touched. A failed write
/// is returned with the path in its context.
pub async fn run_export(config: &ExportConfig, client: &GitHubClient) -> Result<ExportSummary> {
  let repository = &config.repository;
  let progress = |message: &str| {
    if !config.quiet {
      print_info(message);
    }
  };
  let success = |message: &str| {
    if !config.quiet {
      print_success(message);
    }
  };

  progress(&format!(
    "Requesting issues of {}...",
    format_repo_name(&repository.full_name())
  ));

  let issues = client
    .fetch_all_issues(&repository.owner, &repository.repo, |page| {
      debug!("{} issues fetched so far", page.fetched);
      success(&page_message(page));
    })
    .await?;
  info!("Downloaded {} issues of {}", issues.len(), repository.full_name());

  if config.to_screen {
    print_screen(&issues_to_screen(&issues, config.no_body, config.delimiter))?;
  }

  progress("Converting issues...");
  let csv = issues_to_csv(&issues, config.no_body);
  success(&format!("Successfully converted {} issues!", format_count(issues.len())));

  progress("Writing data to csv file");
  write_csv(&config.output, &csv)?;
  success(&format!(
    "Issues were downloaded, converted and saved to {}",
    format_path(&config.output.display().to_string())
  ));

  Ok(ExportSummary {
    issues: issues.len(),
    output: config.output.clone(),
  })
}

fn page_message(page: &PageProgress) -> String {
  match (page.is_last, page.last_page) {
    (true, _) => "Successfully requested last page".to_string(),
    (false, Some(last_page)) => format!("Successfully requested page {} of {}", page.page, last_page),
    (false, None) => format!("Successfully requested page {}", page.page),
  }
}
