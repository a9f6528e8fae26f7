//! Navigation link builder

use super::template::UriTemplate;
use serde::{Deserialize, Serialize};

/// First/previous/next/last links for the current page
///
/// `previous` and `next` are empty strings when not applicable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLinks {
    /// Link to the first page
    pub first: String,
    /// Link to the previous page, or empty on the first page
    pub previous: String,
    /// Link to the next page, or empty on the last page
    pub next: String,
    /// Link to the last page
    pub last: String,
}

impl NavigationLinks {
    /// Check if a previous page exists
    pub fn has_previous(&self) -> bool {
        !self.previous.is_empty()
    }

    /// Check if a next page exists
    pub fn has_next(&self) -> bool {
        !self.next.is_empty()
    }
}

/// Build navigation links.
///
/// `offset` is zero-based relative to `first_page`; page numbers in the
/// links are externally visible numbers (`offset + first_page`). A
/// `page_count` of zero is treated like a single page so `first == last`.
pub fn build_navigation(
    offset: i64,
    first_page: i64,
    page_count: usize,
    template: &UriTemplate,
) -> NavigationLinks {
    let last_index = i64::try_from(page_count.saturating_sub(1)).unwrap_or(i64::MAX);
    let current = offset.saturating_add(first_page);

    let previous = if offset > 0 {
        template.format(current.saturating_sub(1))
    } else {
        String::new()
    };

    let next = if offset < last_index {
        template.format(current.saturating_add(1))
    } else {
        String::new()
    };

    NavigationLinks {
        first: template.format(first_page),
        previous,
        next,
        last: template.format(first_page.saturating_add(last_index)),
    }
}
