//! Pagination module
//!
//! Filters an item sequence and partitions it into fixed-size pages.
//!
//! # Overview
//!
//! - `select_items` keeps the order-preserving subsequence accepted by a route filter
//! - `paginate` splits a sequence into consecutive pages
//! - `Pager` bundles both for a configured page size
//!
//! A page size below 1 means "unpaginated": a single page holding everything,
//! even when that page is empty. With a positive page size an empty input
//! yields zero pages.

mod pager;

pub use pager::{page_count, paginate, select_items, Pager};
