//! CLI module
//!
//! Command-line stand-in for a content host.
//!
//! # Commands
//!
//! - `render` - Paginate an item file for a request URI and print the published variables
//! - `validate` - Check a paginator configuration file

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
