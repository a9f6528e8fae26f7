//! URI templates for navigation links

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;

/// Placeholder replaced by the page number
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Placeholder replaced by the request's route path
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Placeholder replaced by the page query parameter name
pub const PARAM_PLACEHOLDER: &str = "{param}";

/// Link template with exactly one `{page}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    prefix: String,
    suffix: String,
}

impl UriTemplate {
    /// Parse a template such as `/blog?page={page}`
    pub fn parse(template: &str) -> Result<Self> {
        let mut parts = template.split(PAGE_PLACEHOLDER);
        let prefix = parts.next().unwrap_or_default();
        let Some(suffix) = parts.next() else {
            return Err(Error::invalid_value(
                "uri_template",
                format!("'{template}' has no {PAGE_PLACEHOLDER} placeholder"),
            ));
        };
        if parts.next().is_some() {
            return Err(Error::invalid_value(
                "uri_template",
                format!("'{template}' has more than one {PAGE_PLACEHOLDER} placeholder"),
            ));
        }

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// Default per-request template: `<path>?<param>={page}`
    pub fn for_route(path: &str, param: &str) -> Self {
        Self {
            prefix: format!("{path}?{param}="),
            suffix: String::new(),
        }
    }

    /// Render the link for an externally visible page number
    pub fn format(&self, page: i64) -> String {
        format!("{}{page}{}", self.prefix, self.suffix)
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{PAGE_PLACEHOLDER}{}", self.prefix, self.suffix)
    }
}

// ============================================================================
// Configured Link Patterns
// ============================================================================

/// One piece of a configured link pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Path,
    Param,
    Page,
}

/// Configured link pattern using `{path}`, `{param}` and `{page}`.
///
/// The pattern is split into segments once, when the configuration is
/// built. Binding a request path afterwards inserts it as literal text, so
/// placeholder-like text inside a path is never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPattern {
    pattern: String,
    segments: Vec<Segment>,
}

impl LinkPattern {
    /// Parse a pattern such as `/{path}?{param}={page}`
    pub fn parse(pattern: &str) -> Result<Self> {
        let placeholders = Regex::new(r"\{(path|param|page)\}")
            .map_err(|e| Error::invalid_value("uri_template", e.to_string()))?;

        let mut segments = Vec::new();
        let mut last_end = 0;
        for found in placeholders.find_iter(pattern) {
            if found.start() > last_end {
                segments.push(Segment::Literal(pattern[last_end..found.start()].to_string()));
            }
            segments.push(match found.as_str() {
                PATH_PLACEHOLDER => Segment::Path,
                PARAM_PLACEHOLDER => Segment::Param,
                _ => Segment::Page,
            });
            last_end = found.end();
        }
        if last_end < pattern.len() {
            segments.push(Segment::Literal(pattern[last_end..].to_string()));
        }

        match segments.iter().filter(|s| **s == Segment::Page).count() {
            0 => Err(Error::invalid_value(
                "uri_template",
                format!("'{pattern}' has no {PAGE_PLACEHOLDER} placeholder"),
            )),
            1 => Ok(Self {
                pattern: pattern.to_string(),
                segments,
            }),
            _ => Err(Error::invalid_value(
                "uri_template",
                format!("'{pattern}' has more than one {PAGE_PLACEHOLDER} placeholder"),
            )),
        }
    }

    /// Bind a decoded route path and parameter name into a link template
    pub fn bind(&self, path: &str, param: &str) -> UriTemplate {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut target = &mut prefix;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => target.push_str(text),
                Segment::Path => target.push_str(path),
                Segment::Param => target.push_str(param),
                Segment::Page => target = &mut suffix,
            }
        }
        UriTemplate { prefix, suffix }
    }
}

impl fmt::Display for LinkPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
