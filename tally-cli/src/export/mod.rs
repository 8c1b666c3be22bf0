//! # Export
//!
//! Turns the downloaded issues into text. [`csv`] and [`screen`] render the
//! file and terminal views, [`sink`] writes them out.

pub mod csv;
mod fields;
pub mod screen;
pub mod sink;

pub use csv::{CSV_HEADER, issues_to_csv};
pub use screen::{Delimiter, issues_to_screen};
pub use sink::{print_screen, write_csv};
