//! Route registry implementation

use super::predicates::{RoutePredicate, SharedPredicate};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Normalize a route path for predicate lookup.
///
/// Percent-decodes the path (`+` decodes to a space) and makes sure it
/// starts with exactly one `/`. Invalid UTF-8 sequences are replaced
/// rather than rejected.
pub fn normalize_route(route_path: &str) -> String {
    let decoded = decode_path(route_path);
    format!("/{}", decoded.trim_start_matches('/'))
}

/// Percent-decode a path the way hosts hand it to templates
pub(crate) fn decode_path(path: &str) -> String {
    let plus_decoded = path.replace('+', " ");
    let bytes = urlencoding::decode_binary(plus_decoded.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// A predicate resolved for a specific route
pub struct RouteFilter<'a, T> {
    route: String,
    predicate: &'a dyn RoutePredicate<T>,
}

impl<'a, T> RouteFilter<'a, T> {
    /// Create a filter for a normalized route
    pub fn new(route: impl Into<String>, predicate: &'a dyn RoutePredicate<T>) -> Self {
        Self {
            route: route.into(),
            predicate,
        }
    }

    /// Normalized route the predicate was registered under
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Test a single item, attaching the route to any predicate failure
    pub fn test(&self, item: &T) -> Result<bool> {
        self.predicate
            .matches(item)
            .map_err(|e| Error::predicate(&self.route, format!("{e:#}")))
    }
}

impl<T> fmt::Debug for RouteFilter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteFilter")
            .field("route", &self.route)
            .finish_non_exhaustive()
    }
}

/// Resolve the predicate registered for a route path.
///
/// The path is normalized first; lookup is exact, with no prefix or
/// pattern matching. `None` means the route is not filtered.
pub fn resolve_predicate<'a, T>(
    route_path: &str,
    predicates: &'a HashMap<String, SharedPredicate<T>>,
) -> Option<RouteFilter<'a, T>> {
    let route = normalize_route(route_path);
    let predicate = predicates.get(&route)?;
    Some(RouteFilter::new(route, predicate.as_ref()))
}

/// Exact-match mapping from normalized route to predicate
pub struct RouteRegistry<T> {
    routes: HashMap<String, SharedPredicate<T>>,
}

impl<T> Default for RouteRegistry<T> {
    fn default() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }
}

impl<T> RouteRegistry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a predicate, replacing any previous one for the same route
    pub fn insert(
        &mut self,
        route: &str,
        predicate: impl RoutePredicate<T> + 'static,
    ) -> Option<SharedPredicate<T>> {
        self.insert_shared(route, Arc::new(predicate))
    }

    /// Register an already shared predicate
    pub fn insert_shared(
        &mut self,
        route: &str,
        predicate: SharedPredicate<T>,
    ) -> Option<SharedPredicate<T>> {
        self.routes.insert(normalize_route(route), predicate)
    }

    /// Builder-style registration
    #[must_use]
    pub fn with_route(mut self, route: &str, predicate: impl RoutePredicate<T> + 'static) -> Self {
        self.insert(route, predicate);
        self
    }

    /// Resolve the predicate for a route path
    pub fn resolve(&self, route_path: &str) -> Option<RouteFilter<'_, T>> {
        resolve_predicate(route_path, &self.routes)
    }

    /// Check whether a route has a predicate
    pub fn contains(&self, route_path: &str) -> bool {
        self.routes.contains_key(&normalize_route(route_path))
    }

    /// Registered routes, in no particular order
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if no routes are registered
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<T> fmt::Debug for RouteRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut routes: Vec<_> = self.routes.keys().collect();
        routes.sort();
        f.debug_struct("RouteRegistry")
            .field("routes", &routes)
            .finish()
    }
}
