//! Offset module
//!
//! Extracts the requested page offset from a raw request URI.
//!
//! # Overview
//!
//! The offset is read by pattern matching against the URI text rather than
//! through a parsed query string, since hosts disagree on how (and whether)
//! the query string is exposed. The parameter counts when it follows either
//! `?` or `&`, so `/blog?page=2` and `/blog?sort=asc&page=2` both yield page
//! 2. Only the first such fragment is used.

mod parser;

pub use parser::{parse_offset, OffsetParser};
