//! Engine types
//!
//! Request input, pagination output and the request lifecycle phases.

use crate::error::Result;
use crate::navigation::NavigationLinks;
use crate::route::decode_path;
use crate::types::{JsonValue, Page};
use serde::Serialize;
use std::fmt;

/// Per-request input from the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Route path as delivered by the host (may be percent-encoded)
    pub raw_path: String,
    /// Full request URI as received by the server, used for offset extraction
    pub raw_request_uri: String,
}

impl RequestContext {
    /// Create a request context
    pub fn new(raw_path: impl Into<String>, raw_request_uri: impl Into<String>) -> Self {
        Self {
            raw_path: raw_path.into(),
            raw_request_uri: raw_request_uri.into(),
        }
    }

    /// Derive the route path from a full request URI.
    ///
    /// The path is everything before `?` or `#`, without its leading `/`,
    /// matching how hosts hand routes to plugins.
    pub fn from_uri(raw_request_uri: impl Into<String>) -> Self {
        let raw_request_uri = raw_request_uri.into();
        let path_end = raw_request_uri
            .find(['?', '#'])
            .unwrap_or(raw_request_uri.len());
        let raw_path = raw_request_uri[..path_end].trim_start_matches('/').to_string();
        Self {
            raw_path,
            raw_request_uri,
        }
    }

    /// Percent-decoded route path, used in navigation links
    pub fn decoded_path(&self) -> String {
        decode_path(&self.raw_path)
    }
}

/// Request lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    /// No request in flight
    Idle,
    /// Offset parsed, predicate resolved, pages computed
    Resolved,
    /// State handed to the rendering layer
    Published,
}

impl fmt::Display for RequestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Resolved => "resolved",
            Self::Published => "published",
        };
        f.write_str(name)
    }
}

/// Pagination state derived for one request
///
/// Serializes to the flat mapping templates read: `offset`, `first`,
/// `previous`, `next`, `last` and `pages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationState<T> {
    /// Zero-based offset relative to the first page number
    pub offset: i64,
    /// Navigation links
    #[serde(flatten)]
    pub navigation: NavigationLinks,
    /// Filtered items split into pages
    pub pages: Vec<Page<T>>,
    /// Externally visible number of the first page
    #[serde(skip)]
    pub first_page: i64,
}

impl<T> PaginationState<T> {
    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Externally visible number of the current page
    pub fn current_page(&self) -> i64 {
        self.offset.saturating_add(self.first_page)
    }

    /// Items on the current page, if the offset points at an existing page
    pub fn current_items(&self) -> Option<&[T]> {
        let index = usize::try_from(self.offset).ok()?;
        self.pages.get(index).map(Vec::as_slice)
    }

    /// Check whether the offset points at an existing page
    pub fn is_in_range(&self) -> bool {
        self.current_items().is_some()
    }

    /// Total number of items across all pages
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }
}

impl<T: Serialize> PaginationState<T> {
    /// Convert to the JSON value published to templates
    pub fn to_value(&self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }
}
