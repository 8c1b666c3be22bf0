//! # Tally CLI Library
//!
//! Command-line surface, configuration and export pipeline of the tally
//! tool, which downloads every issue of a GitHub repository into a CSV file.

pub mod cli;
pub mod config;
pub mod consts;
pub mod export;
pub mod run;
