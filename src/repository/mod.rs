//! Repository module
//!
//! Supplies the full, already ordered item set for a request.
//!
//! The engine never fetches, sorts or caches content itself; it only asks a
//! repository for everything and filters/slices the result.

mod source;

pub use source::{load_items, FileRepository, InMemoryRepository, ItemRepository};
