//! Offset parser implementation

use crate::error::{Error, Result};
use regex::Regex;
use tracing::debug;

/// Parses the page offset out of raw request URIs.
///
/// Built once per configuration so the match pattern is compiled a single
/// time and reused for every request.
///
/// Matches the first `?<param>=<int>` or `&<param>=<int>` fragment. The
/// returned offset is zero-based: the parsed page number minus the
/// configured first page number.
#[derive(Debug, Clone)]
pub struct OffsetParser {
    /// Query parameter carrying the page number
    param: String,
    /// Externally visible number of the first page
    first_page: i64,
    /// Compiled fragment pattern
    pattern: Regex,
}

impl OffsetParser {
    /// Create a new offset parser for the given query parameter
    pub fn new(param: impl Into<String>, first_page: i64) -> Result<Self> {
        let param = param.into();
        if param.is_empty() {
            return Err(Error::invalid_value("url_parameter", "must not be empty"));
        }

        let pattern = Regex::new(&format!(r"[?&]{}=(-?[0-9]+)", regex::escape(&param)))
            .map_err(|e| Error::invalid_value("url_parameter", e.to_string()))?;

        Ok(Self {
            param,
            first_page,
            pattern,
        })
    }

    /// Query parameter name
    pub fn param(&self) -> &str {
        &self.param
    }

    /// First page number
    pub fn first_page(&self) -> i64 {
        self.first_page
    }

    /// Extract the externally visible page number, if the URI carries one
    pub fn page_number(&self, raw_request_uri: &str) -> Option<i64> {
        let captures = self.pattern.captures(raw_request_uri)?;
        captures.get(1)?.as_str().parse::<i64>().ok()
    }

    /// Extract the zero-based offset, defaulting to 0
    pub fn parse(&self, raw_request_uri: &str) -> i64 {
        let offset = self
            .page_number(raw_request_uri)
            .and_then(|page| page.checked_sub(self.first_page));

        match offset {
            Some(offset) => offset,
            None => {
                debug!(
                    "No usable '{}' parameter in '{}', using offset 0",
                    self.param, raw_request_uri
                );
                0
            }
        }
    }
}

/// Parse the page offset from a raw request URI.
///
/// Convenience wrapper around [`OffsetParser`] for one-off use. An empty
/// parameter name can never match, so it yields offset 0.
pub fn parse_offset(raw_request_uri: &str, url_parameter: &str, first_page: i64) -> i64 {
    OffsetParser::new(url_parameter, first_page)
        .map(|parser| parser.parse(raw_request_uri))
        .unwrap_or(0)
}
