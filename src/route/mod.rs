//! Route filter module
//!
//! Maps normalized route paths to item-selection predicates.
//!
//! # Overview
//!
//! The route module provides:
//! - `RoutePredicate` - Capability deciding whether an item belongs to a route's listing
//! - Built-in predicates (match all, field equality/regex/existence, composites, closures)
//! - `RouteRegistry` - Exact-match lookup from normalized route to predicate
//! - `FilterDefinition` - Declarative predicate description used by YAML configuration

mod definition;
mod predicates;
mod registry;

pub use definition::FilterDefinition;
pub use predicates::{
    predicate_fn, AllOf, AnyOf, FieldEquals, FieldExists, FieldMatches, FnPredicate, MatchAll,
    Not, RoutePredicate, SharedPredicate,
};
pub use registry::{normalize_route, resolve_predicate, RouteFilter, RouteRegistry};
pub(crate) use registry::decode_path;

#[cfg(test)]
mod tests;
