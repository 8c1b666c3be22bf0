//! # Output Formatting
//!
//! Status lines and highlighted values for the terminal. Every styled string
//! goes through `if_supports_color`, so `--colors`, `NO_COLOR` and pipe
//! detection all decide whether escapes are written.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream, Style};

/// When to emit ANSI colors
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Color when the output stream is a terminal and `NO_COLOR` is unset
  Auto,
  /// Always color
  #[value(alias = "yes")]
  Always,
  /// Never color
  #[value(alias = "no")]
  Never,
}

impl ColorMode {
  /// Make this mode the process-wide color decision
  pub fn apply(self) {
    match self {
      ColorMode::Auto => owo_colors::unset_override(),
      ColorMode::Always => owo_colors::set_override(true),
      ColorMode::Never => owo_colors::set_override(false),
    }
  }
}

/// Render `value` with `style` if `stream` accepts colors
fn paint(value: impl Display, stream: Stream, style: Style) -> String {
  value.if_supports_color(stream, |text| text.style(style)).to_string()
}

/// The emoji for `shortcode`, or `fallback` when the table has none
fn symbol(shortcode: &str, fallback: &'static str) -> &'static str {
  emojis::get_by_shortcode(shortcode).map_or(fallback, |emoji| emoji.as_str())
}

fn status_line(shortcode: &str, fallback: &'static str, style: Style, stream: Stream, message: &str) -> String {
  format!("{} {}", paint(symbol(shortcode, fallback), stream, style.bold()), message)
}

/// Print a success message to stdout
pub fn print_success(message: &str) {
  println!(
    "{}",
    status_line("check_mark", "✓", Style::new().green(), Stream::Stdout, message)
  );
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
  eprintln!(
    "{}",
    status_line("cross_mark", "✗", Style::new().red(), Stream::Stderr, message)
  );
}

/// Print a progress message to stdout
pub fn print_info(message: &str) {
  println!(
    "{}",
    status_line("information", "ℹ", Style::new().blue(), Stream::Stdout, message)
  );
}

pub fn format_path(path: &str) -> String {
  paint(path, Stream::Stdout, Style::new().bright_green())
}

pub fn format_repo_name(name: &str) -> String {
  paint(name, Stream::Stdout, Style::new().bright_cyan().bold())
}

pub fn format_count(count: usize) -> String {
  paint(count, Stream::Stdout, Style::new().yellow())
}
