//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Content paginator CLI
#[derive(Parser, Debug)]
#[command(name = "content-paginator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Paginator configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Paginate an item file for a request and print the published variables
    Render {
        /// Item file (JSON array, or YAML sequence for .yaml/.yml)
        #[arg(short, long)]
        items: PathBuf,

        /// Full request URI, e.g. "/blog?page=2"
        #[arg(short, long)]
        uri: String,

        /// Route path as the host reports it (derived from --uri when omitted)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Validate the paginator configuration
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
