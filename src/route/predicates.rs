//! Route predicate implementations
//!
//! Each predicate decides whether a single item is part of a route's listing.

use crate::types::{get_field, JsonValue};
use regex::Regex;
use std::sync::Arc;

/// Core trait for item-selection predicates
///
/// Predicates must be pure: the same item always yields the same answer
/// within a request. An `Err` is a collaborator fault and aborts the
/// request; the engine never swallows it.
pub trait RoutePredicate<T>: Send + Sync {
    /// Decide whether `item` is included
    fn matches(&self, item: &T) -> anyhow::Result<bool>;
}

/// Predicate shared between the configuration and composite predicates
pub type SharedPredicate<T> = Arc<dyn RoutePredicate<T>>;

// ============================================================================
// Match All
// ============================================================================

/// No-op predicate, includes every item
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAll;

impl<T> RoutePredicate<T> for MatchAll {
    fn matches(&self, _item: &T) -> anyhow::Result<bool> {
        Ok(true)
    }
}

// ============================================================================
// Field Predicates
// ============================================================================

/// Includes items whose field equals a fixed value
///
/// Common patterns:
/// - `category == "news"`
/// - `meta.draft == false`
#[derive(Debug, Clone)]
pub struct FieldEquals {
    /// Dotted path to the field
    pub field: String,
    /// Expected value
    pub value: JsonValue,
}

impl FieldEquals {
    /// Create a new field equality predicate
    pub fn new(field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl RoutePredicate<JsonValue> for FieldEquals {
    fn matches(&self, item: &JsonValue) -> anyhow::Result<bool> {
        Ok(get_field(item, &self.field) == Some(&self.value))
    }
}

/// Includes items whose string field matches a regular expression
///
/// Missing and non-string fields never match.
#[derive(Debug, Clone)]
pub struct FieldMatches {
    /// Dotted path to the field
    pub field: String,
    /// Pattern the field must match
    pub pattern: Regex,
}

impl FieldMatches {
    /// Create a new regex field predicate
    pub fn new(field: impl Into<String>, pattern: Regex) -> Self {
        Self {
            field: field.into(),
            pattern,
        }
    }
}

impl RoutePredicate<JsonValue> for FieldMatches {
    fn matches(&self, item: &JsonValue) -> anyhow::Result<bool> {
        Ok(get_field(item, &self.field)
            .and_then(JsonValue::as_str)
            .is_some_and(|s| self.pattern.is_match(s)))
    }
}

/// Includes items that carry a (non-null) field
#[derive(Debug, Clone)]
pub struct FieldExists {
    /// Dotted path to the field
    pub field: String,
}

impl FieldExists {
    /// Create a new field existence predicate
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl RoutePredicate<JsonValue> for FieldExists {
    fn matches(&self, item: &JsonValue) -> anyhow::Result<bool> {
        Ok(get_field(item, &self.field).is_some_and(|v| !v.is_null()))
    }
}

// ============================================================================
// Composite Predicates
// ============================================================================

/// Includes items accepted by every inner predicate (empty = match all)
pub struct AllOf<T> {
    predicates: Vec<SharedPredicate<T>>,
}

impl<T> AllOf<T> {
    /// Create a conjunction of predicates
    pub fn new(predicates: Vec<SharedPredicate<T>>) -> Self {
        Self { predicates }
    }
}

impl<T> RoutePredicate<T> for AllOf<T> {
    fn matches(&self, item: &T) -> anyhow::Result<bool> {
        for predicate in &self.predicates {
            if !predicate.matches(item)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Includes items accepted by at least one inner predicate (empty = match none)
pub struct AnyOf<T> {
    predicates: Vec<SharedPredicate<T>>,
}

impl<T> AnyOf<T> {
    /// Create a disjunction of predicates
    pub fn new(predicates: Vec<SharedPredicate<T>>) -> Self {
        Self { predicates }
    }
}

impl<T> RoutePredicate<T> for AnyOf<T> {
    fn matches(&self, item: &T) -> anyhow::Result<bool> {
        for predicate in &self.predicates {
            if predicate.matches(item)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Inverts an inner predicate
pub struct Not<T> {
    inner: SharedPredicate<T>,
}

impl<T> Not<T> {
    /// Create a negated predicate
    pub fn new(inner: SharedPredicate<T>) -> Self {
        Self { inner }
    }
}

impl<T> RoutePredicate<T> for Not<T> {
    fn matches(&self, item: &T) -> anyhow::Result<bool> {
        Ok(!self.inner.matches(item)?)
    }
}

// ============================================================================
// Closure Predicates
// ============================================================================

/// Host-supplied predicate backed by a closure
pub struct FnPredicate<F> {
    f: F,
}

impl<F> FnPredicate<F> {
    /// Wrap a fallible closure
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> RoutePredicate<T> for FnPredicate<F>
where
    F: Fn(&T) -> anyhow::Result<bool> + Send + Sync,
{
    fn matches(&self, item: &T) -> anyhow::Result<bool> {
        (self.f)(item)
    }
}

/// Wrap an infallible closure as a predicate
pub fn predicate_fn<T, F>(f: F) -> FnPredicate<impl Fn(&T) -> anyhow::Result<bool> + Send + Sync>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    FnPredicate::new(move |item: &T| Ok(f(item)))
}
