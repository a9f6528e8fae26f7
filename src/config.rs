//! Configuration for the paginator
//!
//! This module contains the declarative settings read from YAML and the
//! immutable runtime configuration they compile into. The runtime config is
//! built once at startup and shared read-only by every request.

use crate::error::{Error, Result};
use crate::navigation::{LinkPattern, UriTemplate};
use crate::offset::OffsetParser;
use crate::route::{FilterDefinition, RoutePredicate, RouteRegistry, SharedPredicate};
use crate::types::ContentItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

// ============================================================================
// Declarative Settings
// ============================================================================

/// Paginator settings as written in YAML
///
/// ```yaml
/// url_parameter: page
/// first_page: 1
/// items_per_page: 10
/// paginators:
///   /news:
///     type: field_equals
///     field: category
///     value: news
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PaginatorSettings {
    /// Query parameter carrying the page number
    #[serde(default = "default_url_parameter")]
    pub url_parameter: String,

    /// Externally visible number of the first page
    #[serde(default)]
    pub first_page: i64,

    /// Items per page (values < 1 disable pagination)
    #[serde(default, alias = "posts_per_page")]
    pub items_per_page: i64,

    /// Optional link pattern using `{path}`, `{param}` and `{page}`
    #[serde(default)]
    pub uri_template: Option<String>,

    /// Route filters keyed by route path
    #[serde(default)]
    pub paginators: BTreeMap<String, FilterDefinition>,
}

fn default_url_parameter() -> String {
    "page".to_string()
}

impl Default for PaginatorSettings {
    fn default() -> Self {
        Self {
            url_parameter: default_url_parameter(),
            first_page: 0,
            items_per_page: 0,
            uri_template: None,
            paginators: BTreeMap::new(),
        }
    }
}

impl PaginatorSettings {
    /// Compile settings into a runtime configuration over content items
    pub fn compile(&self) -> Result<PaginationConfig<ContentItem>> {
        let mut config =
            PaginationConfig::new(&self.url_parameter, self.first_page, self.items_per_page)?;

        if let Some(pattern) = &self.uri_template {
            config = config.with_uri_template(pattern)?;
        }

        for (route, definition) in &self.paginators {
            if !route.starts_with('/') {
                return Err(Error::invalid_value(
                    "paginators",
                    format!("route '{route}' must start with '/'"),
                ));
            }
            let predicate = definition
                .compile()
                .map_err(|e| Error::config(format!("Invalid filter for route '{route}': {e}")))?;
            config.routes.insert_shared(route, predicate);
        }

        Ok(config)
    }
}

/// Load paginator settings from a YAML file
pub fn load_settings(path: impl AsRef<Path>) -> Result<PaginatorSettings> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_settings_from_str(&content)
}

/// Load paginator settings from a YAML string
pub fn load_settings_from_str(yaml: &str) -> Result<PaginatorSettings> {
    // An empty document means "all defaults"
    if yaml.trim().is_empty() {
        return Ok(PaginatorSettings::default());
    }
    let settings: PaginatorSettings = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse paginator YAML: {e}")))?;
    Ok(settings)
}

/// Load and compile a runtime configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<PaginationConfig<ContentItem>> {
    let path = path.as_ref();
    let config = load_settings(path)?.compile()?;
    info!(
        "Loaded paginator config from {} ({} filtered routes)",
        path.display(),
        config.routes.len()
    );
    Ok(config)
}

// ============================================================================
// Runtime Configuration
// ============================================================================

/// Immutable per-process pagination configuration
#[derive(Debug)]
pub struct PaginationConfig<T> {
    /// Compiled offset parser (owns the parameter name and first page)
    offset_parser: OffsetParser,
    /// Items per page (values < 1 disable pagination)
    items_per_page: i64,
    /// Optional link pattern, parsed at construction
    uri_template: Option<LinkPattern>,
    /// Route filters
    routes: RouteRegistry<T>,
}

impl<T> PaginationConfig<T> {
    /// Create a configuration without route filters
    pub fn new(url_parameter: &str, first_page: i64, items_per_page: i64) -> Result<Self> {
        Ok(Self {
            offset_parser: OffsetParser::new(url_parameter, first_page)?,
            items_per_page,
            uri_template: None,
            routes: RouteRegistry::new(),
        })
    }

    /// Register a route filter
    #[must_use]
    pub fn with_route(mut self, route: &str, predicate: impl RoutePredicate<T> + 'static) -> Self {
        self.routes.insert(route, predicate);
        self
    }

    /// Register an already shared route filter
    #[must_use]
    pub fn with_shared_route(mut self, route: &str, predicate: SharedPredicate<T>) -> Self {
        self.routes.insert_shared(route, predicate);
        self
    }

    /// Set a custom link pattern (`{path}`, `{param}`, `{page}`)
    pub fn with_uri_template(mut self, pattern: &str) -> Result<Self> {
        self.uri_template = Some(LinkPattern::parse(pattern)?);
        Ok(self)
    }

    /// Query parameter carrying the page number
    pub fn url_parameter(&self) -> &str {
        self.offset_parser.param()
    }

    /// Externally visible number of the first page
    pub fn first_page(&self) -> i64 {
        self.offset_parser.first_page()
    }

    /// Items per page
    pub fn items_per_page(&self) -> i64 {
        self.items_per_page
    }

    /// Offset parser for this configuration
    pub fn offset_parser(&self) -> &OffsetParser {
        &self.offset_parser
    }

    /// Route filters
    pub fn routes(&self) -> &RouteRegistry<T> {
        &self.routes
    }

    /// Link template for a request on `path` (already decoded)
    pub fn uri_template_for(&self, path: &str) -> UriTemplate {
        match &self.uri_template {
            Some(pattern) => pattern.bind(path, self.url_parameter()),
            None => UriTemplate::for_route(path, self.url_parameter()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_load_minimal_settings() {
        let settings = load_settings_from_str("items_per_page: 10").unwrap();
        assert_eq!(settings.url_parameter, "page");
        assert_eq!(settings.first_page, 0);
        assert_eq!(settings.items_per_page, 10);
        assert!(settings.paginators.is_empty());
    }

    #[test]
    fn test_load_empty_settings() {
        assert_eq!(
            load_settings_from_str("  \n").unwrap(),
            PaginatorSettings::default()
        );
    }

    #[test]
    fn test_posts_per_page_alias() {
        let settings = load_settings_from_str("posts_per_page: 4\nfirst_page: 1").unwrap();
        assert_eq!(settings.items_per_page, 4);
        assert_eq!(settings.first_page, 1);
    }

    #[test]
    fn test_compile_settings_with_routes() {
        let yaml = r"
url_parameter: p
first_page: 1
items_per_page: 5
paginators:
  /news:
    type: field_equals
    field: category
    value: news
";
        let config = load_settings_from_str(yaml).unwrap().compile().unwrap();
        assert_eq!(config.url_parameter(), "p");
        assert_eq!(config.first_page(), 1);
        assert_eq!(config.items_per_page(), 5);

        let filter = config.routes().resolve("news").unwrap();
        assert!(filter.test(&json!({"category": "news"})).unwrap());
        assert!(config.routes().resolve("blog").is_none());
    }

    #[test]
    fn test_compile_rejects_relative_route() {
        let yaml = r"
paginators:
  news:
    type: match_all
";
        let err = load_settings_from_str(yaml).unwrap().compile().unwrap_err();
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn test_compile_rejects_bad_filter() {
        let yaml = r"
paginators:
  /news:
    type: field_matches
    field: title
    pattern: '[unclosed'
";
        let err = load_settings_from_str(yaml).unwrap().compile().unwrap_err();
        assert!(err.to_string().contains("Invalid filter for route '/news'"));
    }

    #[test]
    fn test_compile_rejects_empty_parameter() {
        let settings = PaginatorSettings {
            url_parameter: String::new(),
            ..Default::default()
        };
        assert!(settings.compile().is_err());
    }

    #[test]
    fn test_unknown_filter_type() {
        let yaml = r"
paginators:
  /news:
    type: sorted_by
";
        assert!(load_settings_from_str(yaml).is_err());
    }

    #[test]
    fn test_uri_template_for_default() {
        let config: PaginationConfig<ContentItem> = PaginationConfig::new("page", 1, 10).unwrap();
        let template = config.uri_template_for("blog");
        assert_eq!(template.format(2), "blog?page=2");
    }

    #[test]
    fn test_uri_template_for_custom() {
        let config: PaginationConfig<ContentItem> = PaginationConfig::new("page", 1, 10)
            .unwrap()
            .with_uri_template("/{path}/{param}/{page}")
            .unwrap();
        let template = config.uri_template_for("blog");
        assert_eq!(template.format(2), "/blog/page/2");
    }

    #[test]
    fn test_uri_template_keeps_placeholder_text_in_path() {
        let config: PaginationConfig<ContentItem> = PaginationConfig::new("page", 1, 10)
            .unwrap()
            .with_uri_template("/{path}?{param}={page}")
            .unwrap();
        assert_eq!(config.uri_template_for("tag{page}").format(2), "/tag{page}?page=2");
        assert_eq!(config.uri_template_for("x{param}").format(1), "/x{param}?page=1");
    }

    #[test]
    fn test_invalid_uri_template() {
        let result = PaginationConfig::<ContentItem>::new("page", 1, 10)
            .unwrap()
            .with_uri_template("/{path}");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "items_per_page: 3\npaginators:\n  /all:\n    type: match_all").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.items_per_page(), 3);
        assert!(config.routes().contains("/all"));
    }

    #[test]
    fn test_load_settings_missing_file() {
        let err = load_settings("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
