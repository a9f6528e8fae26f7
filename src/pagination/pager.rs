//! Pager implementation

use crate::error::Result;
use crate::route::RouteFilter;
use crate::types::Page;
use tracing::debug;

/// Select the items a route lists.
///
/// Without a filter the items are returned unchanged. With one, the result
/// is the order-preserving subsequence the filter accepts. The first
/// predicate failure aborts selection and is returned as-is.
pub fn select_items<T: Clone>(all_items: &[T], filter: Option<&RouteFilter<'_, T>>) -> Result<Vec<T>> {
    let Some(filter) = filter else {
        return Ok(all_items.to_vec());
    };

    let mut selected = Vec::new();
    for item in all_items {
        if filter.test(item)? {
            selected.push(item.clone());
        }
    }

    debug!(
        "Route {} selected {} of {} items",
        filter.route(),
        selected.len(),
        all_items.len()
    );
    Ok(selected)
}

/// Split items into consecutive pages of `items_per_page`.
///
/// - `items_per_page < 1`: exactly one page with every item
/// - otherwise: full pages followed by a possibly shorter last page, and
///   no pages at all for an empty input
pub fn paginate<T>(items: Vec<T>, items_per_page: i64) -> Vec<Page<T>> {
    let Some(size) = page_size(items_per_page) else {
        return vec![items];
    };

    let mut pages = Vec::with_capacity(items.len().div_ceil(size));
    let mut iter = items.into_iter().peekable();
    while iter.peek().is_some() {
        pages.push(iter.by_ref().take(size).collect());
    }
    pages
}

/// Number of pages `paginate` produces for `total_items` items
pub fn page_count(total_items: usize, items_per_page: i64) -> usize {
    match page_size(items_per_page) {
        Some(size) => total_items.div_ceil(size),
        None => 1,
    }
}

/// Positive page size, or `None` when unpaginated
fn page_size(items_per_page: i64) -> Option<usize> {
    if items_per_page < 1 {
        None
    } else {
        Some(usize::try_from(items_per_page).unwrap_or(usize::MAX))
    }
}

/// Filters and paginates with a fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Items per page (values < 1 disable pagination)
    pub items_per_page: i64,
}

impl Pager {
    /// Create a new pager
    pub fn new(items_per_page: i64) -> Self {
        Self { items_per_page }
    }

    /// Check whether pagination is disabled
    pub fn is_unpaginated(&self) -> bool {
        self.items_per_page < 1
    }

    /// Select and partition in one step
    pub fn pages<T: Clone>(
        &self,
        all_items: &[T],
        filter: Option<&RouteFilter<'_, T>>,
    ) -> Result<Vec<Page<T>>> {
        let selected = select_items(all_items, filter)?;
        Ok(paginate(selected, self.items_per_page))
    }
}
