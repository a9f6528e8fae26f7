//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_settings, PaginationConfig, PaginatorSettings};
use crate::engine::{RequestContext, RequestCoordinator};
use crate::error::{Error, Result};
use crate::output::TemplateVars;
use crate::repository::FileRepository;
use crate::types::ContentItem;
use serde_json::{json, Value};
use std::path::Path;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Render { items, uri, path } => self.render(items, uri, path.as_deref()),
            Commands::Validate => self.validate(),
        }
    }

    /// Load settings, falling back to defaults when no file was given
    fn load_settings(&self) -> Result<PaginatorSettings> {
        match &self.cli.config {
            Some(path) => load_settings(path),
            None => {
                debug!("No config file given, using default settings");
                Ok(PaginatorSettings::default())
            }
        }
    }

    /// Load and compile the runtime configuration
    fn load_config(&self) -> Result<PaginationConfig<ContentItem>> {
        self.load_settings()?.compile()
    }

    /// Paginate an item file for one request
    fn render(&self, items: &Path, uri: &str, path: Option<&str>) -> Result<()> {
        let config = self.load_config()?;
        let repository = FileRepository::new(items);
        let ctx = match path {
            Some(path) => RequestContext::new(path, uri),
            None => RequestContext::from_uri(uri),
        };

        let mut vars = TemplateVars::new();
        RequestCoordinator::new(&config).handle(&ctx, &repository, &mut vars)?;

        self.output_message(&vars.into_value())
    }

    /// Validate the configuration file
    fn validate(&self) -> Result<()> {
        let path = self
            .cli
            .config
            .as_ref()
            .ok_or_else(|| Error::config("Config file not specified (use -c flag)"))?;
        let config = load_settings(path)?.compile()?;

        let mut routes: Vec<&str> = config.routes().routes().collect();
        routes.sort_unstable();

        self.output_message(&json!({
            "valid": true,
            "url_parameter": config.url_parameter(),
            "first_page": config.first_page(),
            "items_per_page": config.items_per_page(),
            "routes": routes,
        }))
    }

    /// Output a message
    fn output_message(&self, msg: &Value) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(msg)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(msg)?,
        };
        println!("{rendered}");
        Ok(())
    }
}
