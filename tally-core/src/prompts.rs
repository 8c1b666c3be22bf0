//! # Prompts Module
//!
//! Provides a custom dialoguer theme for consistent styling across tally's
//! interactive prompts.

use console::Style;
use dialoguer::theme::ColorfulTheme;

/// Returns a custom dialoguer theme matching tally's color palette.
///
/// Features:
/// - Cyan bold prompt text
/// - Green echo of the entered value
pub fn tally_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    values_style: Style::new().green(),
    ..ColorfulTheme::default()
  }
}
