//! Isolated output directories for tests that write export files

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

/// A temporary directory that export files are written into.
///
/// The directory and everything in it is removed when the guard is dropped.
pub struct OutputDirGuard {
  /// The temporary directory backing this guard
  pub temp_dir: TempDir,
}

impl OutputDirGuard {
  /// Create a fresh, empty output directory
  pub fn new() -> Result<Self> {
    let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
    Ok(Self { temp_dir })
  }

  /// Path of `file_name` inside the output directory
  pub fn path(&self, file_name: &str) -> PathBuf {
    self.temp_dir.path().join(file_name)
  }

  /// Read `file_name` back as UTF-8 text
  pub fn read(&self, file_name: &str) -> Result<String> {
    let path = self.path(file_name);
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
  }

  /// Whether `file_name` exists in the output directory
  pub fn exists(&self, file_name: &str) -> bool {
    self.path(file_name).exists()
  }
}
