//! Common types used throughout the content paginator
//!
//! This module contains shared type definitions, type aliases,
//! and small helpers for inspecting JSON content records.

use serde_json::Value;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Content record handled by the bundled repository and declarative filters.
///
/// The engine itself is generic over the item type; this alias is what the
/// YAML-configured predicates and the CLI work with.
pub type ContentItem = JsonValue;

/// A single page of items
pub type Page<T> = Vec<T>;

// ============================================================================
// Field Access
// ============================================================================

/// Look up a field in a content record by dotted path (e.g. `meta.category`).
///
/// An optional leading `$.` is accepted so paths read the same way as
/// JSONPath-style selectors. Returns `None` when any segment is missing or
/// a non-object is traversed.
pub fn get_field<'a>(item: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() {
        return Some(item);
    }

    let mut current = item;
    for part in path.split('.') {
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_field_top_level() {
        let item = json!({"title": "Hello", "category": "news"});
        assert_eq!(get_field(&item, "category"), Some(&json!("news")));
        assert_eq!(get_field(&item, "$.title"), Some(&json!("Hello")));
    }

    #[test]
    fn test_get_field_nested() {
        let item = json!({"meta": {"tags": {"primary": "rust"}}});
        assert_eq!(
            get_field(&item, "meta.tags.primary"),
            Some(&json!("rust"))
        );
    }

    #[test]
    fn test_get_field_missing() {
        let item = json!({"meta": "flat"});
        assert!(get_field(&item, "meta.category").is_none());
        assert!(get_field(&item, "author").is_none());
    }
}
