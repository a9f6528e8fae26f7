//! Tests for route module

use super::*;
use crate::types::ContentItem;
use serde_json::json;
use std::sync::Arc;
use test_case::test_case;

fn post(category: &str) -> ContentItem {
    json!({"title": format!("{category} post"), "category": category})
}

// ============================================================================
// Normalization Tests
// ============================================================================

#[test_case("blog", "/blog" ; "prefixes slash")]
#[test_case("/blog", "/blog" ; "keeps single slash")]
#[test_case("//blog", "/blog" ; "collapses leading slashes")]
#[test_case("%2F%2Fblog", "/blog" ; "collapses encoded leading slashes")]
#[test_case("", "/" ; "root")]
#[test_case("sub%20dir/page", "/sub dir/page" ; "percent decoding")]
#[test_case("hello+world", "/hello world" ; "plus decoding")]
#[test_case("caf%C3%A9", "/café" ; "utf8 decoding")]
fn test_normalize_route(input: &str, expected: &str) {
    assert_eq!(normalize_route(input), expected);
}

// ============================================================================
// Registry Tests
// ============================================================================

#[test]
fn test_registry_exact_match() {
    let registry = RouteRegistry::new().with_route("/blog", FieldEquals::new("category", "news"));

    let filter = registry.resolve("blog").unwrap();
    assert_eq!(filter.route(), "/blog");
    assert!(registry.resolve("blog/2024").is_none());
    assert!(registry.resolve("blo").is_none());
    assert!(registry.resolve("").is_none());
}

#[test]
fn test_registry_resolves_encoded_route() {
    let registry: RouteRegistry<ContentItem> =
        RouteRegistry::new().with_route("my blog", MatchAll);

    assert!(registry.resolve("my%20blog").is_some());
    assert!(registry.contains("/my blog"));
}

#[test]
fn test_registry_replace() {
    let mut registry: RouteRegistry<ContentItem> = RouteRegistry::new();
    assert!(registry.insert("/blog", MatchAll).is_none());
    assert!(registry.insert("blog", MatchAll).is_some());
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
    assert_eq!(registry.routes().collect::<Vec<_>>(), vec!["/blog"]);
}

#[test]
fn test_resolve_predicate_free_function() {
    let mut predicates: std::collections::HashMap<String, SharedPredicate<ContentItem>> =
        std::collections::HashMap::new();
    predicates.insert("/news".to_string(), Arc::new(FieldEquals::new("category", "news")));

    let filter = resolve_predicate("news", &predicates).unwrap();
    assert!(filter.test(&post("news")).unwrap());
    assert!(!filter.test(&post("sports")).unwrap());
    assert!(resolve_predicate("sports", &predicates).is_none());
}

#[test]
fn test_route_filter_wraps_failure() {
    let registry: RouteRegistry<i32> = RouteRegistry::new().with_route(
        "/numbers",
        FnPredicate::new(|n: &i32| {
            if *n < 0 {
                anyhow::bail!("negative value {n}");
            }
            Ok(n % 2 == 0)
        }),
    );

    let filter = registry.resolve("numbers").unwrap();
    assert!(filter.test(&4).unwrap());
    let err = filter.test(&-1).unwrap_err();
    assert!(err.is_predicate_failure());
    assert!(err.to_string().contains("/numbers"));
    assert!(err.to_string().contains("negative value -1"));
}

// ============================================================================
// Predicate Tests
// ============================================================================

#[test]
fn test_field_predicates() {
    let item = json!({"category": "news", "meta": {"draft": false}, "author": null});

    assert!(FieldEquals::new("category", "news").matches(&item).unwrap());
    assert!(FieldEquals::new("meta.draft", false).matches(&item).unwrap());
    assert!(!FieldEquals::new("category", "sports").matches(&item).unwrap());

    let pattern = regex::Regex::new("^ne").unwrap();
    assert!(FieldMatches::new("category", pattern.clone()).matches(&item).unwrap());
    assert!(!FieldMatches::new("meta.draft", pattern).matches(&item).unwrap());

    assert!(FieldExists::new("meta.draft").matches(&item).unwrap());
    assert!(!FieldExists::new("author").matches(&item).unwrap());
    assert!(!FieldExists::new("tags").matches(&item).unwrap());
}

#[test]
fn test_composite_predicates() {
    let news: SharedPredicate<ContentItem> = Arc::new(FieldEquals::new("category", "news"));
    let featured: SharedPredicate<ContentItem> = Arc::new(FieldEquals::new("featured", true));

    let item = json!({"category": "news", "featured": false});

    let all = AllOf::new(vec![news.clone(), featured.clone()]);
    assert!(!all.matches(&item).unwrap());

    let any = AnyOf::new(vec![news.clone(), featured]);
    assert!(any.matches(&item).unwrap());

    assert!(!Not::new(news).matches(&item).unwrap());

    assert!(AllOf::<ContentItem>::new(vec![]).matches(&item).unwrap());
    assert!(!AnyOf::<ContentItem>::new(vec![]).matches(&item).unwrap());
}

#[test]
fn test_closure_predicates() {
    let even = predicate_fn(|n: &i32| n % 2 == 0);
    assert!(even.matches(&2).unwrap());
    assert!(!even.matches(&3).unwrap());
    assert!(RoutePredicate::<i32>::matches(&MatchAll, &3).unwrap());
}

// ============================================================================
// FilterDefinition Tests
// ============================================================================

#[test]
fn test_filter_definition_from_yaml() {
    let yaml = r"
type: all_of
filters:
  - type: field_equals
    field: category
    value: news
  - type: not
    filter:
      type: field_matches
      field: title
      pattern: ^Draft
";
    let def: FilterDefinition = serde_yaml::from_str(yaml).unwrap();
    let predicate = def.compile().unwrap();

    assert!(predicate
        .matches(&json!({"category": "news", "title": "Launch"}))
        .unwrap());
    assert!(!predicate
        .matches(&json!({"category": "news", "title": "Draft: launch"}))
        .unwrap());
    assert!(!predicate
        .matches(&json!({"category": "blog", "title": "Launch"}))
        .unwrap());
}

#[test]
fn test_filter_definition_match_all() {
    let def: FilterDefinition = serde_yaml::from_str("type: match_all").unwrap();
    assert_eq!(def, FilterDefinition::MatchAll);
    assert!(def.compile().unwrap().matches(&json!(1)).unwrap());
}

#[test]
fn test_filter_definition_invalid_pattern() {
    let def = FilterDefinition::FieldMatches {
        field: "title".to_string(),
        pattern: "(unclosed".to_string(),
    };
    let err = def.compile().err().unwrap();
    assert!(err.to_string().contains("pattern for field 'title'"));
}

#[test]
fn test_filter_definition_empty_field() {
    let def = FilterDefinition::FieldExists {
        field: " ".to_string(),
    };
    assert!(def.compile().is_err());
}
